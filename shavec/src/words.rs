//! Word-Level Serialization
//!
//! Packs padded messages into the length-prefixed 32-bit word stream the
//! hardware loads from simulation memory. Records are laid out back-to-back
//! and the consumer recognizes end-of-stream only via one trailing zero
//! word, so the terminator is appended exactly once for the whole stream,
//! never per message.

use crate::padding::PaddedMessage;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Word size in bytes.
pub const WORD_SIZE: usize = 4;

/// End-of-stream marker, appended once after the last message.
pub const TERMINATOR_WORD: u32 = 0x0000_0000;

// =============================================================================
// PER-MESSAGE SERIALIZATION
// =============================================================================

/// Serialize one padded message into its word-level record.
///
/// Output: one length word (the padded byte count), then `len / 4` data
/// words taken as consecutive 4-byte big-endian chunks in original byte
/// order. No terminator: that belongs to the whole stream, not the record.
///
/// # Panics
/// Panics if the padded length is not a multiple of [`WORD_SIZE`] (ruled
/// out by the [`PaddedMessage`] invariant; a failure here is a logic
/// defect) or if it overflows the 32-bit length word.
#[must_use]
pub fn serialize(padded: &PaddedMessage) -> Vec<u32> {
    assert_eq!(
        padded.len() % WORD_SIZE,
        0,
        "padded length {} is not word aligned",
        padded.len()
    );
    let Ok(length_word) = u32::try_from(padded.len()) else {
        panic!("padded length {} overflows the 32-bit length word", padded.len())
    };

    let mut words = Vec::with_capacity(1 + padded.len() / WORD_SIZE);
    words.push(length_word);
    words.extend(
        padded
            .as_bytes()
            .chunks_exact(WORD_SIZE)
            .map(|chunk| u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]])),
    );
    words
}

// =============================================================================
// STREAM ACCUMULATOR
// =============================================================================

/// Accumulates per-message records into one shared word stream.
///
/// Owns the growing stream until [`WordStream::finish`] hands the complete
/// sequence (terminator included) to the renderer. Making the accumulator a
/// type keeps the framing contract in one place: callers cannot forget the
/// terminator or append it per message.
///
/// # Example
/// ```rust
/// use shavec::{pad, WordStream};
///
/// let mut stream = WordStream::new();
/// stream.push(&pad(b"abc")?);
/// stream.push(&pad(b"")?);
/// let words = stream.finish();
/// assert_eq!(words.len(), 17 + 17 + 1);
/// assert_eq!(words.last(), Some(&0));
/// # Ok::<(), shavec::FramingError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordStream {
    words: Vec<u32>,
    messages: usize,
}

impl WordStream {
    /// Create an empty stream.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one message's record to the stream.
    pub fn push(&mut self, padded: &PaddedMessage) {
        self.words.extend(serialize(padded));
        self.messages += 1;
    }

    /// Words accumulated so far, terminator not included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// `true` before the first message is pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Messages appended so far.
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.messages
    }

    /// Close the stream: append the single terminator word and hand the
    /// whole sequence over.
    #[must_use]
    pub fn finish(mut self) -> Vec<u32> {
        self.words.push(TERMINATOR_WORD);
        self.words
    }
}

// =============================================================================
// TESTS
// =============================================================================
