/*! Linked TSV records

Parsing and validation of the repaired IndoWordNet/English linked TSV.

Each valid row becomes a [Record]. Invalid rows are never fatal:
they are logged and reported as [MalformedLine] issues.
!*/
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{info, warn};
use serde::Serialize;

use crate::error::Error;
use crate::issues::{Issues, MalformedLine};
use crate::repair::NB_COLUMNS;
use crate::resolve::Resolution;
use crate::sense::{Pos, SenseKey};

const HEADER_FIRST_FIELD: &str = "iwn_id";

/// Kind of link between an IndoWordNet synset and an English one.
///
/// Variants are declared in alphabetical order, which is the order of the output mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    /// Direct link that collides with another one on the same ILI.
    Dupe,
    /// `Direct` link: both synsets are claimed to be equivalent.
    Equal,
    /// `Hypernymy` link: the English synset is broader.
    Hyper,
}

impl Relation {
    /// Get the relation from the label used in the TSV.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Direct" => Some(Relation::Equal),
            "Hypernymy" => Some(Relation::Hyper),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Equal => "equal",
            Relation::Hyper => "hyper",
            Relation::Dupe => "dupe",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A linked entry.
///
/// Created by [Record::parse], enriched by [crate::resolve::Resolver::resolve],
/// and relabeled to [Relation::Dupe] by [crate::dedup::detect_and_mark_dupes].
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub iwn_id: String,
    pub iwn_pos: Pos,
    pub pwn21_offset: String,
    pub pwn21_pos: Pos,
    pub english_lemmas: String,
    pub english_gloss: String,
    pub hindi_lemmas: String,
    pub hindi_gloss: String,
    pub original_rel: String,
    pub rel: Relation,
    /// `{iwn_id}_{pos}`
    pub iwn_key: String,
    pub pwn21_key: SenseKey,
    pub(crate) resolution: Option<Resolution>,
}

/// Reason for a row to be rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    Columns(usize),
    Relation(String),
    IwnPos(String),
    PwnPos(String),
    Offset(String),
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowError::Columns(n) => write!(f, "only {} columns", n),
            RowError::Relation(r) => write!(f, "unknown rel '{}'", r),
            RowError::IwnPos(p) => write!(f, "unknown IWN POS '{}'", p),
            RowError::PwnPos(p) => write!(f, "unknown PWN POS '{}'", p),
            RowError::Offset(o) => write!(f, "invalid PWN offset '{}'", o),
        }
    }
}

impl Record {
    /// Checks whether the line is the TSV header.
    pub fn is_header(line: &str) -> bool {
        line.trim().split('\t').next() == Some(HEADER_FIRST_FIELD)
    }

    /// Parse and validate a single (non-header) line.
    pub fn parse(line: &str) -> Result<Self, RowError> {
        let row: Vec<&str> = line.trim().split('\t').collect();

        if row.len() < NB_COLUMNS {
            return Err(RowError::Columns(row.len()));
        }

        let original_rel = row[row.len() - 1].trim();
        let rel = Relation::from_label(original_rel)
            .ok_or_else(|| RowError::Relation(original_rel.to_string()))?;

        let iwn_pos = Pos::from_tag(row[1]).ok_or_else(|| RowError::IwnPos(row[1].to_string()))?;
        let pwn21_pos =
            Pos::from_tag(row[3]).ok_or_else(|| RowError::PwnPos(row[3].to_string()))?;

        let offset: u32 = row[2]
            .trim()
            .parse()
            .map_err(|_| RowError::Offset(row[2].to_string()))?;

        Ok(Self {
            iwn_id: row[0].to_string(),
            iwn_pos,
            pwn21_offset: row[2].to_string(),
            pwn21_pos,
            english_lemmas: row[4].to_string(),
            english_gloss: row[5].to_string(),
            hindi_lemmas: row[6].to_string(),
            hindi_gloss: row[7].to_string(),
            original_rel: original_rel.to_string(),
            rel,
            iwn_key: format!("{}_{}", row[0], iwn_pos),
            pwn21_key: SenseKey::new(offset, pwn21_pos),
            resolution: None,
        })
    }

    /// Resolved ILI, if any.
    pub fn ili(&self) -> Option<&str> {
        self.resolution.as_ref().and_then(Resolution::ili)
    }

    /// WordNet 3.0 key the entry was resolved to, if any.
    ///
    /// When the satellite fallback was used, this is the satellite key.
    pub fn pwn30_key(&self) -> Option<SenseKey> {
        self.resolution.as_ref().and_then(Resolution::pwn30_key)
    }

    pub fn resolution(&self) -> Option<&Resolution> {
        self.resolution.as_ref()
    }

    /// Numeric value of the IWN id, used to order duplicate groups.
    pub(crate) fn numeric_id(&self) -> Option<u64> {
        self.iwn_id.trim().parse().ok()
    }
}

/// Parse every line, skipping the header and routing rejected rows to `issues`.
///
/// `lineno` starts at 1.
pub fn parse_lines<I, S>(lines: I, issues: &mut Issues) -> Vec<Record>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut records = Vec::new();
    for (lineno, line) in (1..).zip(lines) {
        let line = line.as_ref();
        if Record::is_header(line) {
            continue;
        }
        match Record::parse(line) {
            Ok(record) => records.push(record),
            Err(e) => {
                match &e {
                    RowError::Columns(_) => warn!(
                        "line {} {}, skipping: {}",
                        lineno,
                        e,
                        line.trim().split('\t').next().unwrap_or("empty")
                    ),
                    _ => warn!("line {} {}, skipping", lineno, e),
                }
                issues.malformed_lines.push(MalformedLine {
                    line_number: lineno,
                    error: e.to_string(),
                    original_line: line.to_string(),
                });
            }
        }
    }

    let equal_count = records.iter().filter(|r| r.rel == Relation::Equal).count();
    let hyper_count = records.iter().filter(|r| r.rel == Relation::Hyper).count();
    info!(
        "Loaded IWN to PWN map: {} direct, {} hypernym links",
        equal_count, hyper_count
    );
    if !issues.malformed_lines.is_empty() {
        info!("Skipped {} malformed lines", issues.malformed_lines.len());
    }

    records
}

/// Load records from the linked TSV at `src`.
pub fn load_records(src: &Path, issues: &mut Issues) -> Result<Vec<Record>, Error> {
    let reader = BufReader::new(File::open(src)?);
    let lines = reader.lines().collect::<Result<Vec<String>, _>>()?;
    Ok(parse_lines(lines, issues))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAT: &str = "IWN1\tNOUN\t1740\tNOUN\tcat\tfeline mammal\tबिल्ली\tएक जानवर\tDirect";

    #[test]
    fn test_parse() {
        let r = Record::parse(CAT).unwrap();
        assert_eq!(r.iwn_id, "IWN1");
        assert_eq!(r.iwn_key, "IWN1_n");
        assert_eq!(r.pwn21_key.to_string(), "00001740-n");
        assert_eq!(r.pwn21_offset, "1740");
        assert_eq!(r.english_lemmas, "cat");
        assert_eq!(r.english_gloss, "feline mammal");
        assert_eq!(r.hindi_lemmas, "बिल्ली");
        assert_eq!(r.hindi_gloss, "एक जानवर");
        assert_eq!(r.original_rel, "Direct");
        assert_eq!(r.rel, Relation::Equal);
        assert!(r.ili().is_none());
    }

    #[test]
    fn test_hypernymy() {
        let line = CAT.replace("Direct", "Hypernymy");
        assert_eq!(Record::parse(&line).unwrap().rel, Relation::Hyper);
    }

    #[test]
    fn test_key_uses_both_pos() {
        let line = "7\tADJECTIVE\t12\tADVERB\ta\tb\tc\td\tDirect";
        let r = Record::parse(line).unwrap();
        assert_eq!(r.iwn_key, "7_a");
        assert_eq!(r.pwn21_key.to_string(), "00000012-r");
    }

    #[test]
    fn test_rejections() {
        assert_eq!(Record::parse("1\tNOUN\t1740"), Err(RowError::Columns(3)));
        assert_eq!(
            Record::parse("1\tNOUN\t1740\tNOUN\ta\tb\tc\td\tWordN"),
            Err(RowError::Relation("WordN".to_string()))
        );
        assert_eq!(
            Record::parse("1\tNOUNS\t1740\tNOUN\ta\tb\tc\td\tDirect"),
            Err(RowError::IwnPos("NOUNS".to_string()))
        );
        assert_eq!(
            Record::parse("1\tNOUN\t1740\tPRON\ta\tb\tc\td\tDirect"),
            Err(RowError::PwnPos("PRON".to_string()))
        );
        assert_eq!(
            Record::parse("1\tNOUN\t17x0\tNOUN\ta\tb\tc\td\tDirect"),
            Err(RowError::Offset("17x0".to_string()))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(RowError::Columns(8).to_string(), "only 8 columns");
        assert_eq!(RowError::Relation("Foo".to_string()).to_string(), "unknown rel 'Foo'");
    }

    #[test]
    fn test_parse_lines() {
        let mut issues = Issues::default();
        let lines = [
            "iwn_id\tiwn_pos\tpwn21_offset\tpwn21_pos\tenglish_lemmas\tenglish_gloss\thindi_lemmas\thindi_gloss\trelation",
            CAT,
            "2\tNOUN\t1740",
            "3\tVERB\t2000\tVERB\trun\tmove fast\tदौड़ना\tतेज़ चलना\tHypernymy",
        ];
        let records = parse_lines(lines, &mut issues);

        assert_eq!(records.len(), 2);
        assert_eq!(issues.malformed_lines.len(), 1);
        let issue = &issues.malformed_lines[0];
        assert_eq!(issue.line_number, 3);
        assert_eq!(issue.error, "only 3 columns");
        assert_eq!(issue.original_line, "2\tNOUN\t1740");
    }

    #[test]
    fn test_parse_lines_empty_line() {
        let mut issues = Issues::default();
        let records = parse_lines([CAT, ""], &mut issues);

        assert_eq!(records.len(), 1);
        let issue = &issues.malformed_lines[0];
        assert_eq!(issue.line_number, 2);
        assert_eq!(issue.error, "only 1 columns");
        assert_eq!(issue.original_line, "");
    }
}
