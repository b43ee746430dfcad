use std::io;
use std::path::PathBuf;

use crate::config::{MAX_LEVELS, MAX_PARTITIONS};

/// Errors from object store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// More partitions were requested than a single hex digit can label.
    #[error("too many partitions requested ({0}, max {max})", max = MAX_PARTITIONS)]
    TooManyPartitions(usize),

    /// More levels were requested than the digest has hex digits.
    #[error("too many cache levels requested ({0}, max {max})", max = MAX_LEVELS)]
    TooManyLevels(usize),

    /// A store needs at least one partition.
    #[error("at least one partition is required")]
    NoPartitions,

    /// The configuration file could not be parsed.
    #[error("invalid store configuration: {0}")]
    Config(String),

    /// No object is stored under the key.
    #[error("object not found: {0}")]
    NotFound(String),

    /// Something other than a regular file sits at the key's path.
    #[error("object is not a file: {key}")]
    NotAFile { key: String },

    /// I/O error from the underlying filesystem.
    #[error("{context} {}: {source}", .path.display())]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    pub(crate) fn io(context: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            context,
            path: path.into(),
            source,
        }
    }

    /// Returns `true` for the not-found case, which callers usually treat as
    /// a cache miss.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
