use std::fmt;

/// Length of a key digest in bytes.
pub const DIGEST_LEN: usize = 20;

/// Number of hexadecimal digits in a key digest.
pub const MAX_NIBBLES: usize = DIGEST_LEN * 2;

/// Fixed-length digest of an object key.
///
/// The digest is the first 20 bytes of the BLAKE3 extendable output of the
/// key's UTF-8 bytes. It only has to be collision resistant; nothing about
/// it is secret. Identical keys always produce the same digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyDigest([u8; DIGEST_LEN]);

impl KeyDigest {
    /// Compute the digest of a key.
    pub fn of(key: &str) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(key.as_bytes());
        let mut out = [0u8; DIGEST_LEN];
        hasher.finalize_xof().fill(&mut out);
        Self(out)
    }

    /// Create a digest from pre-computed bytes.
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Hex-encoded string representation (40 lowercase characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }

    /// The `i`-th hexadecimal digit of the digest, as a value in `0..16`.
    ///
    /// Nibbles are read left to right: the high nibble of byte 0, then its
    /// low nibble, then the high nibble of byte 1, and so on. This matches
    /// the character order of [`to_hex`](Self::to_hex).
    ///
    /// # Panics
    ///
    /// Panics if `i >= MAX_NIBBLES`.
    pub fn nibble(&self, i: usize) -> u8 {
        let byte = self.0[i / 2];
        if i % 2 == 0 {
            byte >> 4
        } else {
            byte & 0x0f
        }
    }

    /// All nibbles of the digest, in hex order.
    pub fn nibbles(&self) -> impl Iterator<Item = u8> + '_ {
        (0..MAX_NIBBLES).map(move |i| self.nibble(i))
    }
}

impl fmt::Debug for KeyDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyDigest({})", self.short_hex())
    }
}

impl fmt::Display for KeyDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; DIGEST_LEN]> for KeyDigest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}
