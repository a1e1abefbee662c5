//! Dataset error and warning taxonomy.
//!
//! Per-line problems are recoverable and surface as [`LoadWarning`]s in
//! the load report; [`DatasetError`] is reserved for conditions that make
//! the whole load unusable.

use std::fmt;
use std::path::PathBuf;

/// A single entry line that could not be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidRoute {
    /// A route with fewer than two stations cannot connect anything.
    #[error("route has fewer than two stations")]
    TooFewStations,

    /// A token that should have been an integer ID was not.
    #[error("invalid integer token {token:?}")]
    BadToken { token: String },
}

/// Fatal loader errors. Any of these aborts the whole load; the caller
/// must not serve queries against a partially built index.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The dataset file could not be opened.
    #[error("cannot open dataset {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from the source failed partway through.
    #[error("I/O error reading dataset: {0}")]
    Read(#[from] std::io::Error),
}

/// Non-fatal findings from a load, reported alongside the built index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// The header line did not parse as an entry count.
    BadHeader { token: String },

    /// An entry line was skipped; `line` is 1-based within the file.
    InvalidEntry { line: usize, error: InvalidRoute },

    /// The declared entry count disagrees with the number of entry lines
    /// actually seen. Diagnostic only; the loaded index is still usable.
    CountMismatch { declared: u64, found: u64 },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::BadHeader { token } => {
                write!(f, "header line is not an entry count: {token:?}")
            }
            LoadWarning::InvalidEntry { line, error } => {
                write!(f, "skipped entry at line {line}: {error}")
            }
            LoadWarning::CountMismatch { declared, found } => {
                write!(f, "header declared {declared} entries but found {found}")
            }
        }
    }
}
