//! Sharded, filesystem-backed keyed object store.
//!
//! Maps arbitrary string keys to byte payloads, one file per object. The
//! digest of a key picks a partition directory and a chain of hex-digit
//! level directories beneath it, so no single directory grows past sixteen
//! subdirectories per level no matter how many keys are stored.
//!
//! # Storage Backends
//!
//! All backends implement the [`ObjectStore`] trait:
//!
//! - [`DiskStore`] -- partitioned directory tree under a root path
//!
//! # Design Rules
//!
//! 1. A key's path is a pure function of the key and the store shape.
//! 2. Writes take an exclusive advisory lock on the object's `.lock`
//!    sidecar and rename a finished temporary file into place; reads take a
//!    shared one. Readers see a complete payload or nothing.
//! 3. Locks are per object; distinct keys never contend.
//! 4. The store holds no mutable in-memory state, so handles are freely
//!    shared across threads and processes.
//! 5. `clean` is store-wide and uncoordinated; callers serialize it.
//! 6. All I/O errors are propagated, never silently ignored.

pub mod config;
pub mod disk;
pub mod error;
pub mod layout;
pub mod lock;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use config::{StoreConfig, MAX_LEVELS, MAX_PARTITIONS};
pub use disk::DiskStore;
pub use error::{StoreError, StoreResult};
pub use layout::{partition_label, Layout, ObjectPath};
pub use traits::ObjectStore;
