/*! Final IWN → ILI mapping

Built once duplicates have been marked.
Records resolved during duplicate detection are reused as is,
the others (hypernymy links) are resolved here.

The mapping is keyed by relation, then by IWN key (`{iwn_id}_{pos}`):

```yaml
equal:
  IWN1_n: i900
hyper:
  IWN2_v: i1234
```
!*/
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;
use serde::Serialize;

use crate::error::Error;
use crate::issues::Issues;
use crate::record::{Record, Relation};
use crate::resolve::{Resolution, Resolver};
use crate::wordnet::Wordnet;

/// Relation → IWN key → ILI.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IliMapping(BTreeMap<Relation, BTreeMap<String, String>>);

/// Counts of mapped records per relation, and of failures per kind.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MappingStats {
    pub mapped: BTreeMap<Relation, usize>,
    pub missing_30: usize,
    pub missing_omw: usize,
    pub missing_ili: usize,
}

impl MappingStats {
    /// All counts, by name, sorted.
    pub fn counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts: BTreeMap<&'static str, usize> = self
            .mapped
            .iter()
            .map(|(rel, count)| (rel.as_str(), *count))
            .collect();
        counts.insert("missing_30", self.missing_30);
        counts.insert("missing_omw", self.missing_omw);
        counts.insert("missing_ili", self.missing_ili);
        counts
    }
}

impl IliMapping {
    pub fn insert(&mut self, rel: Relation, iwn_key: String, ili: String) {
        self.0.entry(rel).or_default().insert(iwn_key, ili);
    }

    pub fn get(&self, rel: Relation) -> Option<&BTreeMap<String, String>> {
        self.0.get(&rel)
    }

    /// Number of entries for `rel`.
    pub fn count(&self, rel: Relation) -> usize {
        self.get(rel).map(BTreeMap::len).unwrap_or(0)
    }

    /// Iterate over `(relation, iwn_key, ili)` triples, sorted.
    pub fn iter(&self) -> impl Iterator<Item = (Relation, &str, &str)> {
        self.0.iter().flat_map(|(rel, entries)| {
            entries
                .iter()
                .map(move |(key, ili)| (*rel, key.as_str(), ili.as_str()))
        })
    }

    /// Write the mapping at `dst`.
    ///
    /// `.json` files are written as JSON, anything else as YAML.
    /// Parent directories are created if needed.
    pub fn write(&self, dst: &Path) -> Result<(), Error> {
        if let Some(parent) = dst.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(File::create(dst)?);
        match dst.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::to_writer_pretty(&mut writer, self)?,
            _ => serde_yaml::to_writer(&mut writer, self)?,
        }
        writer.flush()?;
        info!("Wrote mapping to {:?}", dst);
        Ok(())
    }

    /// Write the mapping as a flat `rel<TAB>iwn_key<TAB>ili` table, with a header.
    pub fn write_tsv(&self, dst: &Path) -> Result<(), Error> {
        if let Some(parent) = dst.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(csv::QuoteStyle::Never)
            .from_path(dst)?;
        writer.write_record(["rel", "iwn_key", "ili"])?;
        for (rel, key, ili) in self.iter() {
            writer.write_record([rel.as_str(), key, ili])?;
        }
        writer.flush()?;
        info!("Wrote flat mapping to {:?}", dst);
        Ok(())
    }
}

/// Build the final mapping from records that went through duplicate detection.
pub fn build_final_mapping<W: Wordnet>(
    records: &mut [Record],
    resolver: &Resolver<W>,
    issues: &mut Issues,
) -> Result<(IliMapping, MappingStats), Error> {
    let mut mapping = IliMapping::default();
    let mut stats = MappingStats::default();

    for record in records.iter_mut() {
        resolver.resolve(record, issues)?;

        match record.resolution() {
            Some(Resolution::Resolved { ili, .. }) => {
                mapping.insert(record.rel, record.iwn_key.clone(), ili.clone());
                *stats.mapped.entry(record.rel).or_default() += 1;
            }
            Some(Resolution::MissingPwn30) => stats.missing_30 += 1,
            Some(Resolution::MissingSynset { .. }) => stats.missing_omw += 1,
            Some(Resolution::MissingIli { .. }) => stats.missing_ili += 1,
            None => {
                return Err(Error::Custom(format!(
                    "record {} left unresolved",
                    record.iwn_id
                )))
            }
        }
    }

    info!("Final mapping statistics:");
    for (name, count) in stats.counts() {
        info!("  {}: {}", name, count);
    }

    Ok((mapping, stats))
}
