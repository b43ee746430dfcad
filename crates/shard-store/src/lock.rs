//! Whole-file reads and writes, coordinated through a sidecar lock file.
//!
//! Each object `<name>` has a lock file `<name>.lock` next to it. Writers
//! hold it exclusively while they stream the payload into a temporary file
//! in the same directory and rename that file over the object. Readers hold
//! it shared while they read. The object path therefore only ever names a
//! complete payload: the previous one or the new one. Locks are OS-level
//! (`flock` / `LockFileEx`) and hold across threads and processes alike.

use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use fs4::FileExt;
use tempfile::NamedTempFile;

/// Mode for newly created object and lock files, before umask.
#[cfg(unix)]
const FILE_MODE: u32 = 0o666;

const LOCK_SUFFIX: &str = ".lock";

/// Sidecar lock file guarding `path`.
pub fn lock_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(LOCK_SUFFIX);
    PathBuf::from(name)
}

/// Replace the contents of `path` with everything read from `src`.
///
/// If reading `src` or writing fails, the previous object is left untouched.
/// Returns the number of bytes written.
pub fn write_locked(path: &Path, src: &mut dyn Read) -> io::Result<u64> {
    let dir = path
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "object path has no parent"))?;

    let mut options = OpenOptions::new();
    options.read(true).write(true).create(true).truncate(false);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }
    let lock = options.open(lock_path(path))?;

    FileExt::lock_exclusive(&lock)?;
    let written = replace_from(dir, path, src);
    let unlocked = FileExt::unlock(&lock);
    let written = written?;
    unlocked?;
    Ok(written)
}

fn replace_from(dir: &Path, path: &Path, src: &mut dyn Read) -> io::Result<u64> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".tmp-");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(FILE_MODE));
    }
    // Dropping the temp file on any early return removes it.
    let mut tmp: NamedTempFile = builder.tempfile_in(dir)?;
    let written = io::copy(src, &mut tmp)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(written)
}

/// Read the full contents of `path`.
///
/// Objects placed without a lock file are read directly.
pub fn read_locked(path: &Path) -> io::Result<Vec<u8>> {
    let lock = match File::open(lock_path(path)) {
        Ok(lock) => Some(lock),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => return Err(e),
    };
    if let Some(lock) = &lock {
        FileExt::lock_shared(lock)?;
    }

    let read = read_all(path);
    let unlocked = match &lock {
        Some(lock) => FileExt::unlock(lock),
        None => Ok(()),
    };
    let data = read?;
    unlocked?;
    Ok(data)
}

fn read_all(path: &Path) -> io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let mut data = Vec::new();
    file.read_to_end(&mut data)?;
    Ok(data)
}
