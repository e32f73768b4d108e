//! Check Command
//!
//! Compare the digest list captured from the hardware run against the
//! expected list produced by `pack`, index by index.

use anyhow::{Context, Result};
use std::path::Path;

/// Compare digest lists line by line. Returns `true` when every index
/// matches and both lists have the same length.
pub fn check(expected: &Path, actual: &Path) -> Result<bool> {
    let expected_digests = read_digest_list(expected)?;
    let actual_digests = read_digest_list(actual)?;

    for (idx, (want, got)) in expected_digests.iter().zip(&actual_digests).enumerate() {
        if want == got {
            println!("vector {idx}: OK");
        } else {
            println!("vector {idx}: FAILED (expected {want}, got {got})");
        }
    }

    if expected_digests.len() != actual_digests.len() {
        eprintln!(
            "WARNING: digest count mismatch: expected {} entries, hardware produced {}",
            expected_digests.len(),
            actual_digests.len()
        );
    }

    let (failed, total) = compare_lists(&expected_digests, &actual_digests);
    println!();
    if failed == 0 {
        println!("All {total} digests verified");
    } else {
        eprintln!("WARNING: {failed} of {total} digests did NOT match");
    }

    Ok(failed == 0)
}

/// Count failures over both lists. Surplus entries on either side count as
/// failures, and the total covers the longer list so the summary never
/// reports more failures than digests.
fn compare_lists(expected: &[String], actual: &[String]) -> (usize, usize) {
    let mismatched = expected
        .iter()
        .zip(actual)
        .filter(|(want, got)| want != got)
        .count();
    let skew = expected.len().abs_diff(actual.len());
    (mismatched + skew, expected.len().max(actual.len()))
}

fn read_digest_list(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read digest list: {}", path.display()))?;
    Ok(text
        .lines()
        .map(|line| line.trim().to_ascii_lowercase())
        .filter(|line| !line.is_empty())
        .collect())
}
