//! Framing Property Tests
//!
//! Exercises the padding and serialization contracts over the full range of
//! message lengths around the block boundaries, plus randomized lengths.

#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use rand::{Rng, RngCore};
use shavec::{pad, padded_len, render_mif, serialize, WordStream, TERMINATOR_WORD};

// =============================================================================
// PADDING PROPERTIES
// =============================================================================

#[test]
fn test_padded_length_is_block_aligned() {
    for len in 0..=200 {
        let message = vec![0x5a; len];
        let padded = pad(&message).unwrap();
        assert_eq!(padded.len() % 64, 0, "len={len}");
        assert_eq!(padded.len(), padded_len(len), "len={len}");
    }
}

#[test]
fn test_length_field_encodes_bit_count() {
    let mut rng = rand::thread_rng();
    for _ in 0..64 {
        let len = rng.gen_range(0..=2048);
        let mut message = vec![0u8; len];
        rng.fill_bytes(&mut message);

        let padded = pad(&message).unwrap();
        let field: [u8; 8] = padded.as_bytes()[padded.len() - 8..].try_into().unwrap();
        assert_eq!(u64::from_be_bytes(field), (len as u64) * 8, "len={len}");
    }
}

#[test]
fn test_stripping_padding_recovers_message() {
    let mut rng = rand::thread_rng();
    for _ in 0..64 {
        let len = rng.gen_range(0..=512);
        let mut message = vec![0u8; len];
        rng.fill_bytes(&mut message);

        let padded = pad(&message).unwrap();
        let bytes = padded.as_bytes();

        // Walk back over the length field and the zero fill to the marker.
        let without_length = &bytes[..bytes.len() - 8];
        let marker = without_length
            .iter()
            .rposition(|&b| b != 0x00)
            .expect("marker byte must exist");
        assert_eq!(without_length[marker], 0x80, "len={len}");
        assert_eq!(&without_length[..marker], &message[..], "len={len}");
    }
}

// =============================================================================
// STREAM PROPERTIES
// =============================================================================

#[test]
fn test_record_word_count() {
    for len in [0, 1, 55, 56, 63, 64, 119, 120, 500] {
        let padded = pad(&vec![b'x'; len]).unwrap();
        let words = serialize(&padded);
        assert_eq!(words.len(), 1 + padded.len() / 4, "len={len}");
    }
}

#[test]
fn test_stream_length_is_sum_of_records_plus_one() {
    let messages: Vec<Vec<u8>> = (0..20).map(|i| vec![b'm'; i * 13]).collect();

    let mut stream = WordStream::new();
    let mut expected = 0;
    for message in &messages {
        let padded = pad(message).unwrap();
        expected += 1 + padded.len() / 4;
        stream.push(&padded);
    }
    assert_eq!(stream.message_count(), messages.len());

    let words = stream.finish();
    assert_eq!(words.len(), expected + 1, "one shared terminator, not per message");
    assert_eq!(*words.last().unwrap(), TERMINATOR_WORD);
}

#[test]
fn test_records_are_self_delimiting_via_length_words() {
    // A consumer parsing length words back-to-back must land exactly on the
    // terminator.
    let messages: &[&[u8]] = &[b"", b"abc", b"0123456789012345678901234567890123456789012345678901234567"];

    let mut stream = WordStream::new();
    for message in messages {
        stream.push(&pad(message).unwrap());
    }
    let words = stream.finish();

    let mut cursor = 0;
    let mut parsed = 0;
    while words[cursor] != TERMINATOR_WORD {
        let record_len = words[cursor] as usize / 4;
        cursor += 1 + record_len;
        parsed += 1;
    }
    assert_eq!(parsed, messages.len());
    assert_eq!(cursor, words.len() - 1, "terminator is the final word");
}

// =============================================================================
// MIF PROPERTIES
// =============================================================================

#[test]
fn test_mif_depth_and_addresses() {
    let mut stream = WordStream::new();
    stream.push(&pad(b"abc").unwrap());
    stream.push(&pad(&[0u8; 60]).unwrap());
    let words = stream.finish();

    let text = render_mif(&words);
    assert!(text.contains(&format!("DEPTH={};", words.len())));

    let content: Vec<&str> = text
        .lines()
        .filter(|line| line.starts_with('\t'))
        .collect();
    assert_eq!(content.len(), words.len());

    for (i, line) in content.iter().enumerate() {
        let (addr, rest) = line[1..].split_once(" : ").expect("address separator");
        assert_eq!(
            usize::from_str_radix(addr, 16).unwrap(),
            i,
            "gap-free address sequence"
        );
        assert_eq!(addr, addr.to_uppercase());
        let word = rest.strip_suffix(';').expect("trailing semicolon");
        assert_eq!(word.len(), 8, "words are fixed-width hex");
        assert_eq!(word, word.to_lowercase());
    }
}
