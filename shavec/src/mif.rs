//! Memory-Initialization File Rendering
//!
//! Renders a finished word stream as Quartus-style MIF text for preloading
//! the simulation memory. Pure: the caller assembles the complete stream
//! (terminator included) first, so a partially rendered memory image can
//! never exist.

use std::fmt::Write;

/// Memory word width in bits. The stream is defined in 32-bit words.
pub const WIDTH: usize = 32;

/// Render `words` as MIF text.
///
/// `DEPTH` is the total word count, terminator included. Addresses are
/// uppercase hex with minimal digits, strictly increasing from 0; data
/// words are exactly 8 lowercase hex digits.
///
/// # Example
/// ```rust
/// let text = shavec::render_mif(&[0x6162_6380, 0x0000_0000]);
/// assert!(text.starts_with("WIDTH=32;\nDEPTH=2;\n"));
/// assert!(text.contains("\t0 : 61626380;\n"));
/// assert!(text.ends_with("END;\n"));
/// ```
#[must_use]
pub fn render_mif(words: &[u32]) -> String {
    // Header is ~70 bytes, each content line is at most 21.
    let mut text = String::with_capacity(80 + words.len() * 21);

    let _ = writeln!(text, "WIDTH={WIDTH};");
    let _ = writeln!(text, "DEPTH={};", words.len());
    text.push_str("ADDRESS_RADIX=HEX;\n");
    text.push_str("DATA_RADIX=HEX;\n");
    text.push('\n');
    text.push_str("CONTENT BEGIN\n");

    for (addr, word) in words.iter().enumerate() {
        let _ = writeln!(text, "\t{addr:X} : {word:08x};");
    }

    text.push_str("END;\n");
    text
}
