//! Gen Command
//!
//! Random test-corpus generation. Messages are drawn from the printable
//! ASCII range minus control characters, so a message can never contain the
//! line separator that delimits the corpus format.

use anyhow::{Context, Result};
use rand::Rng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// Graphic ASCII plus space: 0x20..=0x7e.
const POOL_FIRST: u8 = 0x20;
const POOL_LAST: u8 = 0x7e;

/// Write `count` random messages of up to `max_len` characters to `output`,
/// one message per line.
pub fn generate(output: &Path, count: usize, max_len: usize) -> Result<()> {
    log::info!(
        "generating {count} random messages (max {max_len} chars) into {}",
        output.display()
    );

    let file = File::create(output)
        .with_context(|| format!("Failed to create corpus file: {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    let mut rng = rand::thread_rng();

    for _ in 0..count {
        let len = rng.gen_range(0..=max_len);
        let message: String = (0..len)
            .map(|_| char::from(rng.gen_range(POOL_FIRST..=POOL_LAST)))
            .collect();
        writeln!(writer, "{message}")
            .with_context(|| format!("Failed to write to: {}", output.display()))?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write to: {}", output.display()))?;

    log::info!("corpus written: {}", output.display());
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn corpus_has_one_message_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.txt");

        generate(&path, 40, 64).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.ends_with('\n'));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 40);
        for line in lines {
            assert!(line.len() <= 64);
            assert!(line.bytes().all(|b| (0x20..=0x7e).contains(&b)));
        }
    }
}
