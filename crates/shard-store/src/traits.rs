use std::io::Read;

use crate::error::StoreResult;

/// Keyed object store.
///
/// All implementations must satisfy these invariants:
/// - A key always resolves to the same location for a given store shape.
/// - `put` replaces the whole object; readers see either the old or the new
///   payload, never a mix.
/// - The store never interprets object contents or keys beyond addressing.
/// - All I/O errors are propagated, never silently ignored.
pub trait ObjectStore: Send + Sync {
    /// Check whether an object is stored under `key`.
    ///
    /// Returns `Ok(false)` if nothing is there and an error if the key's
    /// location holds something other than a regular file.
    fn exists(&self, key: &str) -> StoreResult<bool>;

    /// Store everything read from `src` under `key`, replacing any previous
    /// object.
    fn put(&self, key: &str, src: &mut dyn Read) -> StoreResult<()>;

    /// Read the full object stored under `key`.
    ///
    /// Returns [`StoreError::NotFound`](crate::StoreError::NotFound) if no
    /// object is stored there.
    fn get(&self, key: &str) -> StoreResult<Vec<u8>>;

    /// Remove every object, leaving the store empty but usable.
    ///
    /// Not coordinated with concurrent operations; callers must quiesce
    /// other users of the store first.
    fn clean(&self) -> StoreResult<()>;

    /// Store an in-memory payload under `key`.
    fn put_bytes(&self, key: &str, data: &[u8]) -> StoreResult<()> {
        let mut src = data;
        self.put(key, &mut src)
    }
}
