//! All error types for the po2strings crate.
//!
//! Only conditions that stop a conversion outright are errors. Problems inside
//! a catalog are reported as [`crate::types::Diagnostic`]s and never abort.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown encoding `{0}`")]
    UnknownEncoding(String),

    #[error("unknown escaping strategy `{0}`")]
    UnknownEscaping(String),

    #[error("unknown orphan policy `{0}`")]
    UnknownOrphanPolicy(String),
}

impl Error {
    /// Maps an error from opening `path`, turning "not found" into [`Error::InputNotFound`].
    pub fn from_open(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Error::InputNotFound(path.into())
        } else {
            Error::Io(err)
        }
    }
}
