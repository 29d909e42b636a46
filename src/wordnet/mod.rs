/*! Target wordnet access

Synsets are looked up by identifier (`{namespace}-{offset}-{pos}`, e.g. `omw-en-00001740-n`).

Two backends are provided:
- [SqliteWordnet] reads a database built by the `wn` package,
- [MemoryWordnet] holds synsets in memory. It can be loaded from a `synset_id<TAB>ili` dump.

[lookup_synset] implements the lookup policy shared by every stage of the mapping,
including the satellite adjective fallback.
!*/
mod memory;
mod sqlite;

use std::path::Path;

use log::debug;

pub use memory::MemoryWordnet;
pub use sqlite::SqliteWordnet;

use crate::error::Error;
use crate::sense::{Pos, SenseKey};

/// A synset of the target wordnet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synset {
    pub id: String,
    /// Interlingual index identifier (e.g. `i35545`), if the synset has one.
    pub ili: Option<String>,
}

/// Read-only synset lookup.
pub trait Wordnet {
    /// Get a synset by its identifier.
    ///
    /// A missing synset is `Ok(None)`, errors are reserved for backend failures.
    fn synset(&self, id: &str) -> Result<Option<Synset>, Error>;
}

impl<W: Wordnet + ?Sized> Wordnet for &W {
    fn synset(&self, id: &str) -> Result<Option<Synset>, Error> {
        (**self).synset(id)
    }
}

impl<W: Wordnet + ?Sized> Wordnet for Box<W> {
    fn synset(&self, id: &str) -> Result<Option<Synset>, Error> {
        (**self).synset(id)
    }
}

/// Lexicon to query, as `id:version` (e.g. `omw-en:1.4`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    pub id: String,
    pub version: String,
}

impl std::str::FromStr for Lexicon {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((id, version)) if !id.is_empty() && !version.is_empty() => Ok(Self {
                id: id.to_string(),
                version: version.to_string(),
            }),
            _ => Err(Error::UnknownLexicon(s.to_string())),
        }
    }
}

/// Identifiers tried by [lookup_synset] for `key`, in order.
pub fn candidate_ids(namespace: &str, key: &SenseKey) -> Vec<String> {
    let mut ids = vec![key.synset_id(namespace)];
    if key.pos() == Pos::Adjective {
        ids.push(key.as_satellite().synset_id(namespace));
    }
    ids
}

/// Look up the synset for a WordNet 3.0 `key`.
///
/// Adjectives that are not found are looked up again as satellite adjectives.
/// Returns the synset along with the key that matched.
pub fn lookup_synset<W: Wordnet>(
    wordnet: &W,
    namespace: &str,
    key: &SenseKey,
) -> Result<Option<(Synset, SenseKey)>, Error> {
    if let Some(synset) = wordnet.synset(&key.synset_id(namespace))? {
        return Ok(Some((synset, *key)));
    }

    if key.pos() == Pos::Adjective {
        let satellite = key.as_satellite();
        if let Some(synset) = wordnet.synset(&satellite.synset_id(namespace))? {
            debug!("{} found as satellite {}", key, satellite);
            return Ok(Some((synset, satellite)));
        }
    }

    Ok(None)
}

/// Open a wordnet.
///
/// Paths ending in `.tsv` are loaded into a [MemoryWordnet],
/// other paths are opened as `wn` databases restricted to `lexicon`.
pub fn open(path: &Path, lexicon: &Lexicon) -> Result<Box<dyn Wordnet>, Error> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("tsv") => Ok(Box::new(MemoryWordnet::from_path(path)?)),
        _ => Ok(Box::new(SqliteWordnet::open(path, lexicon.clone())?)),
    }
}
