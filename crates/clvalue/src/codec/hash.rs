//! Content hash used by collaborators for content addressing.

use sha2::{Digest, Sha256};

/// Length of a [`content_hash`] digest.
pub const HASH_LENGTH: usize = 32;

/// SHA-256 digest of `bytes`.
pub fn content_hash(bytes: &[u8]) -> [u8; HASH_LENGTH] {
    Sha256::digest(bytes).into()
}
