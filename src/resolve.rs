/*! Record resolution

Resolving a record means translating its WordNet 2.1 key to 3.0 through the [VersionMap],
then finding the 3.0 synset in the target [Wordnet] and reading its ILI.

Both the duplicate detection (direct links) and the final mapping (every other link)
go through [Resolver::resolve], which stores the outcome on the record
and reports failures in the matching issue list.
A record is resolved at most once.
!*/
use log::debug;

use crate::error::Error;
use crate::issues::{Context, Issues, MissingIli, MissingPwn30, MissingSynset};
use crate::record::{Record, Relation};
use crate::sense::SenseKey;
use crate::version_map::VersionMap;
use crate::wordnet::{candidate_ids, lookup_synset, Wordnet};

/// Outcome of a resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved { pwn30_key: SenseKey, ili: String },
    /// No 3.0 key for the 2.1 key.
    MissingPwn30,
    /// No synset for the 3.0 key (nor for its satellite variant).
    MissingSynset { pwn30_key: SenseKey },
    /// The synset has no ILI.
    MissingIli { pwn30_key: SenseKey },
}

impl Resolution {
    pub fn ili(&self) -> Option<&str> {
        match self {
            Resolution::Resolved { ili, .. } => Some(ili),
            _ => None,
        }
    }

    pub fn pwn30_key(&self) -> Option<SenseKey> {
        match self {
            Resolution::Resolved { pwn30_key, .. }
            | Resolution::MissingSynset { pwn30_key }
            | Resolution::MissingIli { pwn30_key } => Some(*pwn30_key),
            Resolution::MissingPwn30 => None,
        }
    }
}

pub struct Resolver<'a, W: Wordnet> {
    map: &'a VersionMap,
    wordnet: &'a W,
    namespace: &'a str,
}

impl<'a, W: Wordnet> Resolver<'a, W> {
    /// `namespace` prefixes synset identifiers (e.g. `omw-en`).
    pub fn new(map: &'a VersionMap, wordnet: &'a W, namespace: &'a str) -> Self {
        Self {
            map,
            wordnet,
            namespace,
        }
    }

    /// Compute the resolution of a record without touching it.
    pub fn lookup(&self, pwn21_key: &SenseKey) -> Result<Resolution, Error> {
        let pwn30_key = match self.map.get(pwn21_key) {
            Some(k) => *k,
            None => return Ok(Resolution::MissingPwn30),
        };

        let resolution = match lookup_synset(self.wordnet, self.namespace, &pwn30_key)? {
            Some((synset, actual_key)) => match synset.ili {
                Some(ili) => Resolution::Resolved {
                    pwn30_key: actual_key,
                    ili,
                },
                None => Resolution::MissingIli {
                    pwn30_key: actual_key,
                },
            },
            None => Resolution::MissingSynset { pwn30_key },
        };
        Ok(resolution)
    }

    /// Resolve `record`, reporting failures in `issues`.
    ///
    /// Already resolved records are left untouched and are not reported again.
    /// Issues of records that are not direct links are tagged with their relation.
    pub fn resolve(&self, record: &mut Record, issues: &mut Issues) -> Result<(), Error> {
        if record.resolution.is_some() {
            return Ok(());
        }

        let resolution = self.lookup(&record.pwn21_key)?;
        self.report(record, &resolution, issues);
        record.resolution = Some(resolution);
        Ok(())
    }

    fn report(&self, record: &Record, resolution: &Resolution, issues: &mut Issues) {
        let rel = match record.rel {
            Relation::Equal => None,
            other => Some(other),
        };

        match resolution {
            Resolution::Resolved { .. } => {}
            Resolution::MissingPwn30 => {
                debug!("{}: no PWN 3.0 key for {}", record.iwn_id, record.pwn21_key);
                issues.missing_pwn30.push(MissingPwn30 {
                    iwn_id: record.iwn_id.clone(),
                    pwn21_key: record.pwn21_key,
                    rel,
                    context: Context::from(record),
                });
            }
            Resolution::MissingSynset { pwn30_key } => {
                debug!("{}: no synset for {}", record.iwn_id, pwn30_key);
                issues.missing_omw.push(MissingSynset {
                    iwn_id: record.iwn_id.clone(),
                    pwn21_key: record.pwn21_key,
                    pwn30_key: *pwn30_key,
                    omw_id_tried: candidate_ids(self.namespace, pwn30_key),
                    rel,
                    context: Context::from(record),
                });
            }
            Resolution::MissingIli { pwn30_key } => {
                debug!("{}: no ILI for {}", record.iwn_id, pwn30_key);
                issues.missing_ili.push(MissingIli {
                    iwn_id: record.iwn_id.clone(),
                    pwn21_key: record.pwn21_key,
                    pwn30_key: *pwn30_key,
                    omw_id: pwn30_key.synset_id(self.namespace),
                    rel,
                    context: Context::from(record),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sense::Pos;
    use crate::wordnet::MemoryWordnet;

    fn record(line: &str) -> Record {
        Record::parse(line).unwrap()
    }

    fn fixtures() -> (VersionMap, MemoryWordnet) {
        let map: VersionMap = [
            (SenseKey::new(1740, Pos::Noun), SenseKey::new(1741, Pos::Noun)),
            (SenseKey::new(10, Pos::Noun), SenseKey::new(11, Pos::Noun)),
            (SenseKey::new(20, Pos::Noun), SenseKey::new(21, Pos::Noun)),
            (
                SenseKey::new(30, Pos::Adjective),
                SenseKey::new(31, Pos::Adjective),
            ),
        ]
        .into_iter()
        .collect();
        let wordnet: MemoryWordnet = [
            ("omw-en-00001741-n", Some("i900")),
            ("omw-en-00000011-n", None),
            ("omw-en-00000031-s", Some("i31")),
        ]
        .into_iter()
        .collect();
        (map, wordnet)
    }

    #[test]
    fn test_resolved() {
        let (map, wn) = fixtures();
        let resolver = Resolver::new(&map, &wn, "omw-en");
        let mut issues = Issues::default();
        let mut r = record("IWN1\tNOUN\t1740\tNOUN\tcat\tg\th\thg\tDirect");

        resolver.resolve(&mut r, &mut issues).unwrap();
        assert_eq!(r.ili(), Some("i900"));
        assert_eq!(r.pwn30_key().unwrap().to_string(), "00001741-n");
        assert_eq!(issues, Issues::default());
    }

    #[test]
    fn test_satellite_key_kept() {
        let (map, wn) = fixtures();
        let resolver = Resolver::new(&map, &wn, "omw-en");
        let mut issues = Issues::default();
        let mut r = record("5\tADJECTIVE\t30\tADJECTIVE\tbig\tg\th\thg\tDirect");

        resolver.resolve(&mut r, &mut issues).unwrap();
        assert_eq!(r.ili(), Some("i31"));
        assert_eq!(r.pwn30_key().unwrap().to_string(), "00000031-s");
    }

    #[test]
    fn test_failures_reported_once() {
        let (map, wn) = fixtures();
        let resolver = Resolver::new(&map, &wn, "omw-en");
        let mut issues = Issues::default();

        let mut no_map = record("1\tNOUN\t99\tNOUN\ta\tb\tc\td\tDirect");
        let mut no_ili = record("2\tNOUN\t10\tNOUN\ta\tb\tc\td\tHypernymy");
        let mut no_synset = record("3\tNOUN\t20\tNOUN\ta\tb\tc\td\tDirect");

        for _ in 0..2 {
            resolver.resolve(&mut no_map, &mut issues).unwrap();
            resolver.resolve(&mut no_ili, &mut issues).unwrap();
            resolver.resolve(&mut no_synset, &mut issues).unwrap();
        }

        assert_eq!(issues.missing_pwn30.len(), 1);
        assert_eq!(issues.missing_pwn30[0].rel, None);
        assert_eq!(issues.missing_ili.len(), 1);
        assert_eq!(issues.missing_ili[0].rel, Some(Relation::Hyper));
        assert_eq!(issues.missing_ili[0].omw_id, "omw-en-00000011-n");
        assert_eq!(issues.missing_omw.len(), 1);
        assert_eq!(issues.missing_omw[0].omw_id_tried, vec!["omw-en-00000021-n"]);

        assert_eq!(no_map.resolution(), Some(&Resolution::MissingPwn30));
        assert!(no_synset.pwn30_key().is_some());
        assert!(no_synset.ili().is_none());
    }

    #[test]
    fn test_missing_adjective_lists_both_ids() {
        let map: VersionMap = [(
            SenseKey::new(40, Pos::Adjective),
            SenseKey::new(41, Pos::Adjective),
        )]
        .into_iter()
        .collect();
        let wn = MemoryWordnet::default();
        let resolver = Resolver::new(&map, &wn, "omw-en");
        let mut issues = Issues::default();
        let mut r = record("6\tADJECTIVE\t40\tADJECTIVE\ta\tb\tc\td\tDirect");

        resolver.resolve(&mut r, &mut issues).unwrap();
        assert_eq!(
            issues.missing_omw[0].omw_id_tried,
            vec!["omw-en-00000041-a", "omw-en-00000041-s"]
        );
    }
}
