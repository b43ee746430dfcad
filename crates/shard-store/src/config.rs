use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shard_types::MAX_NIBBLES;

use crate::error::{StoreError, StoreResult};

/// Maximum number of partitions; each one is labelled by a single hex digit.
pub const MAX_PARTITIONS: usize = 16;

/// Maximum number of levels; one per hex digit of the key digest.
pub const MAX_LEVELS: usize = MAX_NIBBLES;

/// Shape of an on-disk store.
///
/// Every process that opens the same `root` must use the same
/// `partitions` and `levels`, or objects written by one will not be found by
/// the other.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Root directory; the store owns everything beneath it.
    pub root: PathBuf,
    /// Number of top-level shard directories, in `1..=16`.
    pub partitions: usize,
    /// Number of nested hex-digit directories under each partition, in `0..=40`.
    pub levels: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("shardstore"),
            partitions: MAX_PARTITIONS,
            levels: 2,
        }
    }
}

impl StoreConfig {
    pub fn new(root: impl Into<PathBuf>, partitions: usize, levels: usize) -> Self {
        Self {
            root: root.into(),
            partitions,
            levels,
        }
    }

    /// Check the partition and level counts against their limits.
    pub fn validate(&self) -> StoreResult<()> {
        if self.partitions > MAX_PARTITIONS {
            return Err(StoreError::TooManyPartitions(self.partitions));
        }
        if self.levels > MAX_LEVELS {
            return Err(StoreError::TooManyLevels(self.levels));
        }
        if self.partitions == 0 {
            return Err(StoreError::NoPartitions);
        }
        Ok(())
    }

    /// Parse a TOML document. Missing fields take their defaults.
    pub fn from_toml_str(s: &str) -> StoreResult<Self> {
        toml::from_str(s).map_err(|e| StoreError::Config(e.to_string()))
    }

    /// Load a TOML configuration file.
    pub fn load(path: &Path) -> StoreResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| StoreError::io("failed to read config", path, e))?;
        Self::from_toml_str(&text)
    }
}
