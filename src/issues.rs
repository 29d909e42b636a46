/*! Issue collection and reporting

Every problem met while mapping is stored here with enough context
(ids, keys, lemmas, glosses) to be fixed by hand in the source data.
The report is a YAML document with a `summary` block followed by the full `issues`.
!*/
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;
use serde::Serialize;

use crate::error::Error;
use crate::record::{Record, Relation};
use crate::sense::SenseKey;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MalformedLine {
    pub line_number: usize,
    pub error: String,
    pub original_line: String,
}

/// Lemmas and glosses of a record, flattened into each issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Context {
    pub english_lemmas: String,
    pub english_gloss: String,
    pub hindi_lemmas: String,
    pub hindi_gloss: String,
}

impl From<&Record> for Context {
    fn from(r: &Record) -> Self {
        Self {
            english_lemmas: r.english_lemmas.clone(),
            english_gloss: r.english_gloss.clone(),
            hindi_lemmas: r.hindi_lemmas.clone(),
            hindi_gloss: r.hindi_gloss.clone(),
        }
    }
}

/// No WordNet 3.0 counterpart for the 2.1 key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingPwn30 {
    pub iwn_id: String,
    pub pwn21_key: SenseKey,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<Relation>,
    #[serde(flatten)]
    pub context: Context,
}

/// No synset in the target wordnet for the 3.0 key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingSynset {
    pub iwn_id: String,
    pub pwn21_key: SenseKey,
    pub pwn30_key: SenseKey,
    pub omw_id_tried: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<Relation>,
    #[serde(flatten)]
    pub context: Context,
}

/// The synset exists but has no ILI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingIli {
    pub iwn_id: String,
    pub pwn21_key: SenseKey,
    pub pwn30_key: SenseKey,
    pub omw_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<Relation>,
    #[serde(flatten)]
    pub context: Context,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateMember {
    pub iwn_id: String,
    pub hindi_lemmas: String,
    pub hindi_gloss: String,
}

/// Several direct links reaching the same ILI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateIli {
    pub ili: String,
    pub pwn30_key: Option<SenseKey>,
    pub english_lemmas: String,
    pub english_gloss: String,
    pub iwn_entries: Vec<DuplicateMember>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Issues {
    pub malformed_lines: Vec<MalformedLine>,
    pub duplicate_ili: Vec<DuplicateIli>,
    pub missing_pwn30: Vec<MissingPwn30>,
    pub missing_omw: Vec<MissingSynset>,
    pub missing_ili: Vec<MissingIli>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub malformed_lines: usize,
    pub duplicate_ili: usize,
    pub duplicate_ili_entries: usize,
    pub missing_pwn30: usize,
    pub missing_omw: usize,
    pub missing_ili: usize,
}

#[derive(Serialize)]
struct Report<'a> {
    summary: Summary,
    issues: &'a Issues,
}

impl Issues {
    pub fn summary(&self) -> Summary {
        Summary {
            malformed_lines: self.malformed_lines.len(),
            duplicate_ili: self.duplicate_ili.len(),
            duplicate_ili_entries: self
                .duplicate_ili
                .iter()
                .map(|d| d.iwn_entries.len())
                .sum(),
            missing_pwn30: self.missing_pwn30.len(),
            missing_omw: self.missing_omw.len(),
            missing_ili: self.missing_ili.len(),
        }
    }

    /// Serialize the report as YAML into `writer`.
    pub fn write_report<W: Write>(&self, writer: W) -> Result<(), Error> {
        let report = Report {
            summary: self.summary(),
            issues: self,
        };
        serde_yaml::to_writer(writer, &report)?;
        Ok(())
    }

    /// Write the report at `dst`, creating parent directories if needed.
    pub fn write(&self, dst: &Path) -> Result<(), Error> {
        if let Some(parent) = dst.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(File::create(dst)?);
        self.write_report(&mut writer)?;
        writer.flush()?;

        let summary = self.summary();
        info!("Wrote issues to {:?}", dst);
        info!("malformed_lines: {}", summary.malformed_lines);
        info!("duplicate_ili: {}", summary.duplicate_ili);
        info!("duplicate_ili_entries: {}", summary.duplicate_ili_entries);
        info!("missing_pwn30: {}", summary.missing_pwn30);
        info!("missing_omw: {}", summary.missing_omw);
        info!("missing_ili: {}", summary.missing_ili);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sense::Pos;

    fn context() -> Context {
        Context {
            english_lemmas: "cat".to_string(),
            english_gloss: "feline".to_string(),
            hindi_lemmas: "बिल्ली".to_string(),
            hindi_gloss: "एक जानवर".to_string(),
        }
    }

    #[test]
    fn test_summary() {
        let mut issues = Issues::default();
        issues.duplicate_ili.push(DuplicateIli {
            ili: "i1".to_string(),
            pwn30_key: None,
            english_lemmas: String::new(),
            english_gloss: String::new(),
            iwn_entries: vec![
                DuplicateMember {
                    iwn_id: "1".to_string(),
                    hindi_lemmas: String::new(),
                    hindi_gloss: String::new(),
                };
                3
            ],
        });
        issues.missing_pwn30.push(MissingPwn30 {
            iwn_id: "4".to_string(),
            pwn21_key: SenseKey::new(1, Pos::Noun),
            rel: None,
            context: context(),
        });

        let summary = issues.summary();
        assert_eq!(summary.duplicate_ili, 1);
        assert_eq!(summary.duplicate_ili_entries, 3);
        assert_eq!(summary.missing_pwn30, 1);
        assert_eq!(summary.malformed_lines, 0);
    }

    #[test]
    fn test_report_layout() {
        let mut issues = Issues::default();
        issues.missing_pwn30.push(MissingPwn30 {
            iwn_id: "4".to_string(),
            pwn21_key: SenseKey::new(1740, Pos::Noun),
            rel: Some(Relation::Hyper),
            context: context(),
        });

        let mut out = Vec::new();
        issues.write_report(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        let value: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();
        assert_eq!(value["summary"]["missing_pwn30"].as_u64(), Some(1));
        let entry = &value["issues"]["missing_pwn30"][0];
        assert_eq!(entry["pwn21_key"].as_str(), Some("00001740-n"));
        assert_eq!(entry["rel"].as_str(), Some("hyper"));
        assert_eq!(entry["hindi_lemmas"].as_str(), Some("बिल्ली"));

        // summary comes first
        assert!(out.find("summary").unwrap() < out.find("issues").unwrap());
    }
}
