//! Pack Command
//!
//! The driver loop: one pass over the corpus extends the word stream and
//! the digest list in lockstep, keeping the two outputs index-aligned for
//! cross-validation. Both outputs are assembled fully in memory and written
//! whole; a partial word stream is never on disk.

use anyhow::{Context, Result};
use shavec::{digest_hex, pad, render_mif, WordStream};
use std::path::Path;

/// Pack the messages in `input` into a MIF memory image at `mif` and the
/// expected digest list at `hashes`.
pub fn pack(input: &Path, mif: &Path, hashes: &Path) -> Result<()> {
    let corpus = std::fs::read(input)
        .with_context(|| format!("Failed to read corpus file: {}", input.display()))?;

    let mut stream = WordStream::new();
    let mut digests = String::new();

    for (idx, line) in split_messages(&corpus).enumerate() {
        // The corpus is defined as UTF-8 text; a line that is not valid
        // UTF-8 aborts the run rather than being skipped or substituted.
        std::str::from_utf8(line).with_context(|| {
            format!(
                "{}: line {} is not valid UTF-8",
                input.display(),
                idx + 1
            )
        })?;

        digests.push_str(&digest_hex(line));
        digests.push('\n');

        let padded = pad(line)
            .with_context(|| format!("{}: line {} cannot be padded", input.display(), idx + 1))?;
        stream.push(&padded);
    }

    let message_count = stream.message_count();
    let words = stream.finish();
    log::info!(
        "packed {message_count} messages into {} words",
        words.len()
    );

    std::fs::write(mif, render_mif(&words))
        .with_context(|| format!("Failed to write MIF file: {}", mif.display()))?;
    std::fs::write(hashes, digests)
        .with_context(|| format!("Failed to write digest list: {}", hashes.display()))?;

    log::info!("wrote {} and {}", mif.display(), hashes.display());
    Ok(())
}

/// Split the corpus into per-message byte slices, one per line.
///
/// Both `\n` and `\r\n` terminate a line and the terminator never reaches
/// the message bytes, so a corpus written on Windows frames the same words
/// and digests as one written on Unix. A trailing newline closes the last
/// message instead of opening an empty one, matching line-oriented readers.
fn split_messages(corpus: &[u8]) -> impl Iterator<Item = &[u8]> {
    let body = corpus.strip_suffix(b"\n").unwrap_or(corpus);
    // An empty corpus holds no messages, not one empty message.
    body.split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .filter(move |_| !corpus.is_empty())
}
