//! Dataset error type (malformed or unreadable input).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    /// Header row lacks a required column. Input must be tab-separated.
    #[error("{}: missing required column `{column}` in tab-separated header", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },
    /// File has a header but no usable URL rows.
    #[error("{}: no URL rows", path.display())]
    Empty { path: PathBuf },
    #[error("{}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
