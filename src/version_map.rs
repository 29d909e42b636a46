/*! WordNet 2.1 → 3.0 version mapping

Loads the UPC mapping files (`wn21-30.{adj,adv,noun,verb}`).
Each line holds a 2.1 offset followed by `(3.0 offset, confidence)` pairs:

```text
00001740 00001740 1
00002056 00002137 0.458 00002452 0.542
```

The candidate with the highest confidence is kept.
On equal confidence, the greatest offset wins, so that the selection does not depend on the line order.
!*/
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, warn};

use crate::error::Error;
use crate::sense::{Pos, SenseKey};

/// Mapping files along with the POS of their entries.
pub const MAPPING_FILES: [(&str, Pos); 4] = [
    ("wn21-30.adj", Pos::Adjective),
    ("wn21-30.adv", Pos::Adverb),
    ("wn21-30.noun", Pos::Noun),
    ("wn21-30.verb", Pos::Verb),
];

/// Pick the best candidate among `(offset, score)` pairs.
///
/// Returns [None] when `candidates` is empty.
pub fn best_candidate<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    candidates
        .into_iter()
        .max_by(|(a_off, a_score), (b_off, b_score)| {
            a_score.total_cmp(b_score).then_with(|| a_off.cmp(b_off))
        })
        .map(|(offset, _)| offset)
}

/// Immutable WordNet 2.1 → 3.0 sense key mapping.
#[derive(Debug, Default, Clone)]
pub struct VersionMap {
    map: HashMap<SenseKey, SenseKey>,
}

impl VersionMap {
    /// Load every mapping file from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self, Error> {
        let mut map = Self::default();
        for (filename, pos) in MAPPING_FILES {
            let path = dir.join(filename);
            debug!("loading {:?}", path);
            let reader = BufReader::new(File::open(&path)?);
            map.load(reader, pos)?;
        }
        info!("Loaded PWN 2.1 to 3.0 map: {} mappings", map.len());
        Ok(map)
    }

    /// Add mappings for `pos` read from `reader`.
    ///
    /// Lines with less than 3 fields are ignored.
    /// Lines with a non-numeric 2.1 offset are skipped and logged.
    /// So are candidates with a non-numeric offset or score.
    pub fn load<R: BufRead>(&mut self, reader: R, pos: Pos) -> Result<(), Error> {
        for (lineno, line) in (1..).zip(reader.lines()) {
            let line = line?;
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() < 3 {
                continue;
            }

            let offset: u32 = match parts[0].parse() {
                Ok(o) => o,
                Err(_) => {
                    warn!("{} map line {}: invalid offset '{}'", pos, lineno, parts[0]);
                    continue;
                }
            };

            let pairs = parts[1..].chunks(2);
            if parts[1..].len() % 2 != 0 {
                warn!("{} map line {}: unpaired candidate ignored", pos, lineno);
            }

            let mut candidates = Vec::with_capacity(parts.len() / 2);
            for pair in pairs.filter(|pair| pair.len() == 2) {
                if pair[0].parse::<u32>().is_err() {
                    warn!("{} map line {}: invalid candidate '{}'", pos, lineno, pair[0]);
                    continue;
                }
                match pair[1].parse::<f64>() {
                    Ok(score) => candidates.push((pair[0], score)),
                    Err(_) => {
                        warn!("{} map line {}: invalid score '{}'", pos, lineno, pair[1]);
                    }
                }
            }

            let best = best_candidate(candidates).and_then(|o| o.parse::<u32>().ok());
            match best {
                Some(best) => {
                    self.map.insert(SenseKey::new(offset, pos), SenseKey::new(best, pos));
                }
                None => warn!("{} map line {}: no usable candidate", pos, lineno),
            }
        }
        Ok(())
    }

    /// Get the 3.0 key for a 2.1 key.
    pub fn get(&self, key: &SenseKey) -> Option<&SenseKey> {
        self.map.get(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl FromIterator<(SenseKey, SenseKey)> for VersionMap {
    fn from_iter<T: IntoIterator<Item = (SenseKey, SenseKey)>>(iter: T) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}
