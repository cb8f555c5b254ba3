//! Error types for native font scanning.

use std::{io, path::PathBuf, result};

use availablefonts_core::SourceError;

/// Errors that can occur while scanning font directories.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("none of the font directories exist")]
    NoDirectories,

    #[error("failed to read font directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid font pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

pub type Result<T> = result::Result<T, ScanError>;

impl From<ScanError> for SourceError {
    fn from(err: ScanError) -> Self {
        match err {
            ScanError::NoDirectories => SourceError::Unsupported,
            other => SourceError::Failed(other.to_string()),
        }
    }
}
