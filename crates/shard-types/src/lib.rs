//! Foundation types for Shardstore.
//!
//! Every object in a Shardstore tree is addressed by the digest of its key.
//! This crate owns that digest and the small amount of key parsing the
//! on-disk layout needs.
//!
//! # Key Types
//!
//! - [`KeyDigest`] -- 20-byte BLAKE3 digest of a key string
//! - [`extension`] -- the file extension carried over from a key

pub mod digest;
pub mod key;

pub use digest::{KeyDigest, DIGEST_LEN, MAX_NIBBLES};
pub use key::extension;
