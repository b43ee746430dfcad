//! Address derivation: where a key lives on disk.
//!
//! ```text
//! root/
//!   <partition>/            one hex digit, (digest[0] >> 4) % partitions
//!     <nibble 0>/
//!       <nibble 1>/
//!         .../
//!           <hex digest><key extension>
//! ```
//!
//! Partition directories are labelled with the same single hex digit at
//! bootstrap and at lookup, so labels agree for every partition count up to
//! sixteen.

use std::path::{Path, PathBuf};

use shard_types::{extension, KeyDigest};

/// Location of an object: its directory and the file name within it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectPath {
    pub dir: PathBuf,
    pub file_name: String,
}

impl ObjectPath {
    /// Full path to the object file.
    pub fn file(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

/// Pure mapping from keys to paths for one store shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
    partitions: usize,
    levels: usize,
}

impl Layout {
    /// Build a layout rooted at `root`.
    ///
    /// The caller is responsible for having validated `partitions` and
    /// `levels` (see [`crate::StoreConfig::validate`]).
    pub fn new(root: impl Into<PathBuf>, partitions: usize, levels: usize) -> Self {
        Self {
            root: root.into(),
            partitions,
            levels,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn partitions(&self) -> usize {
        self.partitions
    }

    pub fn levels(&self) -> usize {
        self.levels
    }

    /// Partition index selected by a digest.
    pub fn partition_of(&self, digest: &KeyDigest) -> usize {
        usize::from(digest.nibble(0)) % self.partitions
    }

    /// Derive the location of `key`.
    pub fn locate(&self, key: &str) -> ObjectPath {
        let digest = KeyDigest::of(key);

        let mut dir = self
            .root
            .join(partition_label(self.partition_of(&digest)));
        for nibble in digest.nibbles().take(self.levels) {
            dir.push(hex_digit(nibble).to_string());
        }

        let file_name = format!("{}{}", digest.to_hex(), extension(key));
        ObjectPath { dir, file_name }
    }

    /// Every partition directory, in index order.
    pub fn partition_dirs(&self) -> impl Iterator<Item = PathBuf> + '_ {
        (0..self.partitions).map(move |i| self.root.join(partition_label(i)))
    }
}

/// Directory name of partition `index`: a single lowercase hex digit.
pub fn partition_label(index: usize) -> String {
    format!("{index:x}")
}

fn hex_digit(nibble: u8) -> char {
    char::from(b"0123456789abcdef"[usize::from(nibble & 0x0f)])
}
