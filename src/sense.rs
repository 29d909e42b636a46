//! Parts of speech and WordNet sense keys.
//!
//! A sense key is a synset offset together with a part-of-speech letter,
//! written `{offset:08}-{pos}` (e.g. `00001740-n`).
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use serde::{Serialize, Serializer};

use crate::error::Error;

lazy_static! {
    /// Part-of-speech tags used by IndoWordNet in both POS columns of the linked TSV.
    pub static ref POS_TAGS: HashMap<&'static str, Pos> = [
        ("NOUN", Pos::Noun),
        ("VERB", Pos::Verb),
        ("ADVERB", Pos::Adverb),
        ("ADJECTIVE", Pos::Adjective),
    ]
    .into_iter()
    .collect();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pos {
    Noun,
    Verb,
    Adverb,
    Adjective,
    /// Satellite adjective. Never found in source data, only produced
    /// when looking adjectives up in the wordnet.
    Satellite,
}

impl Pos {
    /// Get the [Pos] for an IndoWordNet tag (`NOUN`, `VERB`, …).
    pub fn from_tag(tag: &str) -> Option<Self> {
        POS_TAGS.get(tag).copied()
    }

    pub fn letter(&self) -> char {
        match self {
            Pos::Noun => 'n',
            Pos::Verb => 'v',
            Pos::Adverb => 'r',
            Pos::Adjective => 'a',
            Pos::Satellite => 's',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'n' => Some(Pos::Noun),
            'v' => Some(Pos::Verb),
            'r' => Some(Pos::Adverb),
            'a' => Some(Pos::Adjective),
            's' => Some(Pos::Satellite),
            _ => None,
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Offset + part of speech, identifying a synset inside a given WordNet version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SenseKey {
    offset: u32,
    pos: Pos,
}

impl SenseKey {
    pub fn new(offset: u32, pos: Pos) -> Self {
        Self { offset, pos }
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Same offset, filed as a satellite adjective.
    pub fn as_satellite(&self) -> Self {
        Self {
            offset: self.offset,
            pos: Pos::Satellite,
        }
    }

    /// Identifier of this sense inside a wordnet lexicon namespace,
    /// e.g. `omw-en-00001740-n`.
    pub fn synset_id(&self, namespace: &str) -> String {
        format!("{}-{}", namespace, self)
    }
}

impl fmt::Display for SenseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08}-{}", self.offset, self.pos)
    }
}

impl FromStr for SenseKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (offset, pos) = s
            .rsplit_once('-')
            .ok_or_else(|| Error::Custom(format!("sense key '{}' has no POS", s)))?;
        let offset = offset
            .parse()
            .map_err(|_| Error::Custom(format!("sense key '{}' has an invalid offset", s)))?;
        let mut letters = pos.chars();
        let pos = match (letters.next(), letters.next()) {
            (Some(l), None) => Pos::from_letter(l),
            _ => None,
        }
        .ok_or_else(|| Error::Custom(format!("sense key '{}' has an invalid POS", s)))?;

        Ok(Self { offset, pos })
    }
}

impl Serialize for SenseKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
