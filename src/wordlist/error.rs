use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading a word list. Querying a loaded list never fails.
#[derive(Debug, Error)]
pub enum WordlistError {
    #[error("cannot read word list {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The configured word column does not exist on this line.
    #[error("line {line}: no column {column}")]
    MissingColumn { line: usize, column: usize },

    #[error("line {line}: cannot split into columns")]
    Malformed { line: usize },
}
