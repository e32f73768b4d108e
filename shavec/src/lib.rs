//! # Shavec
//!
//! Reference test vectors for validating hardware SHA-256 cores.
//!
//! Turns arbitrary messages into (a) a bit-exact padded word stream with a
//! fixed framing layout, ready to preload into a simulation memory, and
//! (b) the matching expected digests the hardware run is checked against.
//! Everything in this crate is a pure computation over in-memory bytes;
//! file handling belongs to the CLI shell.
//!
//! # Usage
//! ```rust
//! use shavec::{digest_hex, pad, render_mif, WordStream};
//!
//! let messages: &[&[u8]] = &[b"abc", b""];
//!
//! let mut stream = WordStream::new();
//! let mut digests = Vec::new();
//! for message in messages {
//!     digests.push(digest_hex(message));
//!     stream.push(&pad(message)?);
//! }
//!
//! let mif = render_mif(&stream.finish());
//! assert!(mif.starts_with("WIDTH=32;\nDEPTH=35;"));
//! assert_eq!(digests[1].len(), 64);
//! # Ok::<(), shavec::FramingError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

mod digest;
mod error;
mod mif;
mod padding;
mod words;

// =============================================================================
// EXPORTS
// =============================================================================

pub use digest::{digest_hex, DIGEST_HEX_LEN};
pub use error::FramingError;
pub use mif::{render_mif, WIDTH};
pub use padding::{pad, padded_len, PaddedMessage, BLOCK_SIZE, LENGTH_FIELD_SIZE};
pub use words::{serialize, WordStream, TERMINATOR_WORD, WORD_SIZE};
