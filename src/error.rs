//! Error enum
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
    Sqlite(rusqlite::Error),
    /// Lexicon specifier that is not of the `id:version` form.
    UnknownLexicon(String),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Yaml(e) => write!(f, "yaml error: {}", e),
            Error::Json(e) => write!(f, "json error: {}", e),
            Error::Csv(e) => write!(f, "csv error: {}", e),
            Error::Sqlite(e) => write!(f, "wordnet database error: {}", e),
            Error::UnknownLexicon(l) => write!(f, "invalid lexicon specifier '{}'", l),
            Error::Custom(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Error {
        Error::Yaml(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Json(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<rusqlite::Error> for Error {
    fn from(e: rusqlite::Error) -> Error {
        Error::Sqlite(e)
    }
}
