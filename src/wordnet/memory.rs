//! In-memory wordnet.
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{info, warn};

use super::{Synset, Wordnet};
use crate::error::Error;

/// Synset id → optional ILI.
#[derive(Debug, Default, Clone)]
pub struct MemoryWordnet {
    synsets: HashMap<String, Option<String>>,
}

impl MemoryWordnet {
    pub fn insert(&mut self, id: impl Into<String>, ili: Option<String>) {
        self.synsets.insert(id.into(), ili);
    }

    /// Load a `synset_id<TAB>ili` dump.
    ///
    /// An empty or absent second column means the synset has no ILI.
    /// Lines starting with `#` and empty lines are ignored.
    pub fn load<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut wordnet = Self::default();
        for (lineno, line) in (1..).zip(reader.lines()) {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split('\t');
            let id = match fields.next().map(str::trim) {
                Some(id) if !id.is_empty() => id,
                _ => {
                    warn!("wordnet dump line {}: no synset id", lineno);
                    continue;
                }
            };
            let ili = fields
                .next()
                .map(str::trim)
                .filter(|ili| !ili.is_empty())
                .map(String::from);
            wordnet.insert(id, ili);
        }
        Ok(wordnet)
    }

    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let wordnet = Self::load(BufReader::new(File::open(path)?))?;
        info!("Loaded {} synsets from {:?}", wordnet.len(), path);
        Ok(wordnet)
    }

    pub fn len(&self) -> usize {
        self.synsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }
}

impl Wordnet for MemoryWordnet {
    fn synset(&self, id: &str) -> Result<Option<Synset>, Error> {
        Ok(self.synsets.get(id).map(|ili| Synset {
            id: id.to_string(),
            ili: ili.clone(),
        }))
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for MemoryWordnet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, Option<V>)>>(iter: T) -> Self {
        Self {
            synsets: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.map(Into::into)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_load() {
        let dump = "# id\tili\nomw-en-00001741-n\ti900\nomw-en-00001742-n\t\nomw-en-00001743-n\n\n";
        let wn = MemoryWordnet::load(Cursor::new(dump)).unwrap();
        assert_eq!(wn.len(), 3);

        let synset = wn.synset("omw-en-00001741-n").unwrap().unwrap();
        assert_eq!(synset.ili.as_deref(), Some("i900"));
        assert_eq!(wn.synset("omw-en-00001742-n").unwrap().unwrap().ili, None);
        assert_eq!(wn.synset("omw-en-00001743-n").unwrap().unwrap().ili, None);
        assert!(wn.synset("omw-en-00001744-n").unwrap().is_none());
    }
}
