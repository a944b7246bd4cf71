//! Error types for the similarity engine and the document layer around it.

use std::path::PathBuf;

use thiserror::Error;

/// Precondition violations at the scoring entry points.
///
/// Normalization and hash generation are total and never produce this.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimilarityError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl SimilarityError {
    pub(crate) fn zero_k() -> Self {
        Self::InvalidArgument("k-gram size must be positive".to_string())
    }
}

/// Errors raised while loading a document's raw text.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is too large ({size} bytes, limit {limit})")]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("{0} looks like a binary file")]
    Binary(PathBuf),

    #[error("{0} is not valid UTF-8")]
    InvalidUtf8(PathBuf),
}

/// Errors raised while reading `codesim.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config value: {0}")]
    Invalid(String),
}
