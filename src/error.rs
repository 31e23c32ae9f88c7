//! Error types for the drill engine, vocabulary loading and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Precondition failures of the drill engine.
///
/// None of these are transient: each one means the caller asked for
/// something the current session state cannot provide.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrillError {
    /// No term can be drawn from an empty vocabulary.
    #[error("the vocabulary is empty, no term can be drilled")]
    EmptyVocabulary,

    /// The term is not part of the score table.
    #[error("unknown term: {0}")]
    UnknownTerm(String),

    /// An answer was submitted while no question was on screen.
    #[error("no question is currently being asked")]
    NoActiveQuestion,

    /// A direction was chosen before the session was started.
    #[error("the session has not been started")]
    NotStarted,
}

/// Failures while reading or writing vocabulary files.
#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON deck: {0}")]
    Json(#[from] serde_json::Error),

    /// The header row does not name the requested column.
    #[error("missing column '{column}' in header")]
    MissingColumn { column: String },

    /// A data row has fewer fields than the header requires.
    #[error("line {line}: expected at least {expected} fields, found {found}")]
    MalformedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// The file parsed but held no entries.
    #[error("no vocabulary entries found")]
    Empty,
}

/// Failures while loading `wortdrill.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
