//! Digest Oracle
//!
//! Expected-hash side of every test vector, delegated wholesale to the
//! `sha2` crate. The digest is computed over the raw message bytes, never
//! the padded stream, so it stays an independent acceptance criterion for
//! the hardware run.

use sha2::{Digest, Sha256};

/// Hex characters in a rendered SHA-256 digest.
pub const DIGEST_HEX_LEN: usize = 64;

/// SHA-256 digest of `message`, rendered as 64 lowercase hex characters.
///
/// # Example
/// ```rust
/// let digest = shavec::digest_hex(b"abc");
/// assert!(digest.starts_with("ba7816bf"));
/// assert_eq!(digest.len(), 64);
/// ```
#[must_use]
pub fn digest_hex(message: &[u8]) -> String {
    hex::encode(Sha256::digest(message))
}
