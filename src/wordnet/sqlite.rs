//! `wn` database backend.
//!
//! Reads the SQLite database maintained by the `wn` Python package.
//! Only the `lexicons`, `synsets` and `ilis` tables are used.
use std::path::Path;

use log::info;
use rusqlite::{params, Connection, OpenFlags, OptionalExtension};

use super::{Lexicon, Synset, Wordnet};
use crate::error::Error;

const LEXICON_QUERY: &str = "SELECT rowid FROM lexicons WHERE id = ?1 AND version = ?2";

const SYNSET_QUERY: &str = "SELECT s.id, i.id
    FROM synsets AS s
    LEFT JOIN ilis AS i ON i.rowid = s.ili_rowid
    WHERE s.id = ?1 AND s.lexicon_rowid = ?2";

/// Read-only connection to a `wn` database, restricted to one lexicon.
pub struct SqliteWordnet {
    conn: Connection,
    lexicon_rowid: i64,
}

impl SqliteWordnet {
    /// Open the database at `path`.
    ///
    /// Fails if the file does not exist or if `lexicon` is not in the database.
    pub fn open(path: &Path, lexicon: Lexicon) -> Result<Self, Error> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Self::from_connection(conn, lexicon)
    }

    /// Use an already opened connection.
    pub fn from_connection(conn: Connection, lexicon: Lexicon) -> Result<Self, Error> {
        let lexicon_rowid: Option<i64> = conn
            .query_row(LEXICON_QUERY, params![lexicon.id, lexicon.version], |row| {
                row.get(0)
            })
            .optional()?;

        let lexicon_rowid = lexicon_rowid
            .ok_or_else(|| Error::UnknownLexicon(format!("{}:{}", lexicon.id, lexicon.version)))?;

        info!("Using lexicon {}:{}", lexicon.id, lexicon.version);
        Ok(Self {
            conn,
            lexicon_rowid,
        })
    }
}

impl Wordnet for SqliteWordnet {
    fn synset(&self, id: &str) -> Result<Option<Synset>, Error> {
        let mut stmt = self.conn.prepare_cached(SYNSET_QUERY)?;
        let synset = stmt
            .query_row(params![id, self.lexicon_rowid], |row| {
                Ok(Synset {
                    id: row.get(0)?,
                    ili: row.get(1)?,
                })
            })
            .optional()?;
        Ok(synset)
    }
}
