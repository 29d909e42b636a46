//! IWN → ILI mapping pipeline
//!
//! Links the IndoWordNet synsets of the linked TSV to the Interlingual Index,
//! going through the WordNet 2.1 → 3.0 mapping and the target wordnet.
//!
//! # Processing
//! 1. The version map is loaded from the UPC mapping files.
//! 1. Records are parsed from the TSV. Malformed lines are reported and skipped.
//! 1. Direct links are resolved and the ones sharing an ILI are relabeled `dupe`.
//! 1. Remaining links are resolved and the final mapping is built.
//! 1. The mapping and the issues report are written.
use std::path::PathBuf;

use log::{debug, info};

use crate::dedup::{detect_and_mark_dupes, DupeGroup};
use crate::error::Error;
use crate::issues::Issues;
use crate::mapping::{build_final_mapping, IliMapping, MappingStats};
use crate::record::{self, Record, Relation};
use crate::resolve::Resolver;
use crate::version_map::VersionMap;
use crate::wordnet::{self, Lexicon, Wordnet};

/// Number of duplicate groups shown in the run summary.
const SHOWN_DUPE_GROUPS: usize = 5;

/// Result of a mapping run, once outputs are written.
#[derive(Debug)]
pub struct RunOutput {
    pub records: Vec<Record>,
    pub dupe_groups: Vec<DupeGroup>,
    pub mapping: IliMapping,
    pub stats: MappingStats,
    pub issues: Issues,
}

pub struct Iwn2Ili {
    src: PathBuf,
    wordnet: PathBuf,
    map_dir: PathBuf,
    lexicon: Lexicon,
    mapping_out: PathBuf,
    issues_out: PathBuf,
    tsv_out: Option<PathBuf>,
}

impl Iwn2Ili {
    pub fn new(
        src: PathBuf,
        wordnet: PathBuf,
        map_dir: PathBuf,
        lexicon: Lexicon,
        mapping_out: PathBuf,
        issues_out: PathBuf,
        tsv_out: Option<PathBuf>,
    ) -> Self {
        Self {
            src,
            wordnet,
            map_dir,
            lexicon,
            mapping_out,
            issues_out,
            tsv_out,
        }
    }

    /// Run the mapping on already loaded data, without writing anything.
    pub fn map<W: Wordnet>(
        mut records: Vec<Record>,
        map: &VersionMap,
        wordnet: &W,
        namespace: &str,
        mut issues: Issues,
    ) -> Result<RunOutput, Error> {
        let resolver = Resolver::new(map, wordnet, namespace);
        let dupe_groups = detect_and_mark_dupes(&mut records, &resolver, &mut issues)?;
        let (mapping, stats) = build_final_mapping(&mut records, &resolver, &mut issues)?;

        Ok(RunOutput {
            records,
            dupe_groups,
            mapping,
            stats,
            issues,
        })
    }

    pub fn run(&self) -> Result<RunOutput, Error> {
        info!("Loading wordnet {:?}", self.wordnet);
        let wordnet = wordnet::open(&self.wordnet, &self.lexicon)?;

        let map = VersionMap::from_dir(&self.map_dir)?;

        let mut issues = Issues::default();
        let records = record::load_records(&self.src, &mut issues)?;
        debug!("{} records loaded from {:?}", records.len(), self.src);

        let output = Self::map(records, &map, &wordnet, &self.lexicon.id, issues)?;

        output.mapping.write(&self.mapping_out)?;
        if let Some(tsv_out) = &self.tsv_out {
            output.mapping.write_tsv(tsv_out)?;
        }
        output.issues.write(&self.issues_out)?;

        output.log_summary();
        Ok(output)
    }
}

impl RunOutput {
    fn log_summary(&self) {
        info!("=== Summary ===");
        info!("Total entries: {}", self.records.len());
        for rel in [Relation::Equal, Relation::Hyper, Relation::Dupe] {
            info!("  {}: {}", rel, self.mapping.count(rel));
        }
        info!(
            "Duplicate groups: {} ILIs involving {} entries",
            self.dupe_groups.len(),
            self.dupe_groups.iter().map(|g| g.members.len()).sum::<usize>()
        );

        if !self.dupe_groups.is_empty() {
            info!("First {} duplicate groups:", SHOWN_DUPE_GROUPS);
        }
        for group in self.dupe_groups.iter().take(SHOWN_DUPE_GROUPS) {
            info!("  ILI: {}", group.ili);
            info!("  English: {}", self.records[group.members[0]].english_lemmas);
            for idx in &group.members {
                let r = &self.records[*idx];
                info!("    IWN {}: {}", r.iwn_id, r.hindi_lemmas);
            }
        }
    }
}
