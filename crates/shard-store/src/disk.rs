use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::layout::Layout;
use crate::lock::{read_locked, write_locked};
use crate::traits::ObjectStore;

/// Mode for created directories, before umask.
#[cfg(unix)]
const DIR_MODE: u32 = 0o777;

/// Filesystem-backed object store.
///
/// Objects live in a tree of partition and level directories under a root
/// (see [`crate::layout`]). The handle holds nothing but its configuration,
/// so it can be cloned and shared freely; any number of handles, in any
/// number of processes, may point at the same root as long as they agree on
/// the partition and level counts.
#[derive(Clone, Debug)]
pub struct DiskStore {
    layout: Layout,
}

impl DiskStore {
    /// Open a store at `root`, creating the root and its partition
    /// directories if needed.
    pub fn open(root: impl AsRef<Path>, partitions: usize, levels: usize) -> StoreResult<Self> {
        Self::from_config(&StoreConfig::new(root.as_ref(), partitions, levels))
    }

    /// Open a store described by `config`.
    ///
    /// The configuration is validated before anything is created on disk.
    pub fn from_config(config: &StoreConfig) -> StoreResult<Self> {
        config.validate()?;

        let root = std::path::absolute(&config.root)
            .map_err(|e| StoreError::io("failed to resolve root", &config.root, e))?;

        let store = Self {
            layout: Layout::new(root, config.partitions, config.levels),
        };
        store.create_partitions()?;

        info!(
            root = %store.root().display(),
            partitions = config.partitions,
            levels = config.levels,
            "store opened"
        );
        Ok(store)
    }

    /// Absolute root directory.
    pub fn root(&self) -> &Path {
        self.layout.root()
    }

    pub fn partitions(&self) -> usize {
        self.layout.partitions()
    }

    pub fn levels(&self) -> usize {
        self.layout.levels()
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Absolute path of the file that holds (or would hold) `key`.
    pub fn path_of(&self, key: &str) -> PathBuf {
        self.layout.locate(key).file()
    }

    fn create_partitions(&self) -> StoreResult<()> {
        for dir in self.layout.partition_dirs() {
            create_dir_all(&dir)?;
        }
        Ok(())
    }
}

impl ObjectStore for DiskStore {
    fn exists(&self, key: &str) -> StoreResult<bool> {
        let path = self.path_of(key);
        let meta = match fs::metadata(&path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(key, "object absent");
                return Ok(false);
            }
            Err(e) => return Err(StoreError::io("failed to stat", path, e)),
        };

        if !meta.is_file() {
            return Err(StoreError::NotAFile {
                key: key.to_string(),
            });
        }
        Ok(true)
    }

    fn put(&self, key: &str, src: &mut dyn Read) -> StoreResult<()> {
        let location = self.layout.locate(key);
        create_dir_all(&location.dir)?;

        let path = location.file();
        let written =
            write_locked(&path, src).map_err(|e| StoreError::io("failed to write", &path, e))?;

        debug!(key, path = %path.display(), bytes = written, "object stored");
        Ok(())
    }

    fn get(&self, key: &str) -> StoreResult<Vec<u8>> {
        let path = self.path_of(key);
        match read_locked(&path) {
            Ok(data) => {
                debug!(key, bytes = data.len(), "object read");
                Ok(data)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(key.to_string()))
            }
            Err(e) => Err(StoreError::io("failed to read", path, e)),
        }
    }

    fn clean(&self) -> StoreResult<()> {
        let root = self.root();
        match fs::remove_dir_all(root) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(StoreError::io("failed to remove", root, e)),
        }
        self.create_partitions()?;

        info!(root = %root.display(), "store cleaned");
        Ok(())
    }
}

fn create_dir_all(dir: &Path) -> StoreResult<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder
        .create(dir)
        .map_err(|e| StoreError::io("failed to create directory", dir, e))
}
