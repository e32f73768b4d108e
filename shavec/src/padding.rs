//! SHA-256 Padding Transform
//!
//! Extends a raw message with the `0x80` marker byte, zero fill, and the
//! big-endian 64-bit bit-length so the result is 64-byte block aligned.
//! A layout error here silently corrupts every downstream hardware test
//! without any host-side symptom, so the block invariant is asserted rather
//! than trusted.

use crate::error::FramingError;

// =============================================================================
// CONSTANTS
// =============================================================================

/// SHA-256 block size in bytes (512 bits).
pub const BLOCK_SIZE: usize = 64;

/// Size in bytes of the trailing bit-length field.
pub const LENGTH_FIELD_SIZE: usize = 8;

/// Marker byte carrying the mandatory `1` bit that starts the padding.
const MARKER_BYTE: u8 = 0x80;

// =============================================================================
// PADDED MESSAGE
// =============================================================================

/// A message with SHA-256 padding applied.
///
/// Invariant: the byte length is a non-zero multiple of [`BLOCK_SIZE`].
/// The only way to construct one is [`pad`], which asserts the invariant,
/// so every consumer may rely on block alignment without re-checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedMessage {
    bytes: Vec<u8>,
}

impl PaddedMessage {
    /// Padded contents: `message ++ 0x80 ++ 0x00* ++ BE64(bit_len)`.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Padded length in bytes. Always a multiple of [`BLOCK_SIZE`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`: padding a zero-length message still yields one block.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of 64-byte blocks the hardware will consume.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.bytes.len() / BLOCK_SIZE
    }

    /// Iterate over the 64-byte (16-word) blocks in feed order.
    pub fn blocks(&self) -> impl Iterator<Item = &[u8]> {
        self.bytes.chunks_exact(BLOCK_SIZE)
    }
}

// =============================================================================
// PADDING
// =============================================================================

/// Apply the SHA-256 padding scheme to `message`.
///
/// Appends the `0x80` marker, zero bytes until the length is congruent to
/// 56 (mod 64), then the original bit-length as an 8-byte big-endian
/// integer.
///
/// # Errors
/// Returns [`FramingError::MessageTooLong`] if the message bit-length does
/// not fit the 64-bit length field. It is never truncated.
///
/// # Panics
/// Panics if the result is not block aligned. That cannot happen for any
/// representable input length and would indicate a defect in this function.
///
/// # Example
/// ```rust
/// let padded = shavec::pad(b"abc")?;
/// assert_eq!(padded.len(), 64);
/// assert_eq!(padded.as_bytes()[3], 0x80);
/// # Ok::<(), shavec::FramingError>(())
/// ```
pub fn pad(message: &[u8]) -> Result<PaddedMessage, FramingError> {
    let bit_len = u64::try_from(message.len())
        .ok()
        .and_then(|len| len.checked_mul(8))
        .ok_or(FramingError::MessageTooLong {
            len: message.len(),
        })?;

    let total = padded_len(message.len());
    let mut bytes = Vec::with_capacity(total);
    bytes.extend_from_slice(message);
    bytes.push(MARKER_BYTE);
    bytes.resize(total - LENGTH_FIELD_SIZE, 0x00);
    bytes.extend_from_slice(&bit_len.to_be_bytes());

    assert_eq!(
        bytes.len() % BLOCK_SIZE,
        0,
        "padding produced {} bytes for a {}-byte message; not block aligned",
        bytes.len(),
        message.len()
    );

    Ok(PaddedMessage { bytes })
}

/// Padded length in bytes for a message of `message_len` bytes.
///
/// Smallest multiple of [`BLOCK_SIZE`] with room for the message, the
/// marker byte, and the length field.
#[must_use]
pub const fn padded_len(message_len: usize) -> usize {
    (message_len + 1 + LENGTH_FIELD_SIZE).div_ceil(BLOCK_SIZE) * BLOCK_SIZE
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_message_pads_to_one_block() {
        let padded = pad(b"").unwrap();
        assert_eq!(padded.len(), 64);
        assert_eq!(padded.block_count(), 1);
        assert_eq!(padded.as_bytes()[0], 0x80);
        assert!(padded.as_bytes()[1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn single_block_boundary_is_55_bytes() {
        // 55 + marker + 8-byte length field exactly fill one block.
        assert_eq!(pad(&[0xaa; 55]).unwrap().len(), 64);
        // One byte more no longer leaves room for marker + length field.
        assert_eq!(pad(&[0xaa; 56]).unwrap().len(), 128);
    }

    #[test]
    fn length_field_is_big_endian_bit_count() {
        let padded = pad(b"abc").unwrap();
        let field: [u8; 8] = padded.as_bytes()[56..].try_into().unwrap();
        assert_eq!(u64::from_be_bytes(field), 24);
    }

    #[test]
    fn predicted_length_matches_actual() {
        for len in 0..=300 {
            let message = vec![0x61; len];
            assert_eq!(pad(&message).unwrap().len(), padded_len(len), "len={len}");
        }
    }

    #[test]
    fn blocks_are_exactly_sixty_four_bytes() {
        let padded = pad(&[0x42; 100]).unwrap();
        let blocks: Vec<&[u8]> = padded.blocks().collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(|b| b.len() == 64));
    }
}
