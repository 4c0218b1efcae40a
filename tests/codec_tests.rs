//! Tests for WAL entry serialization and deserialization
//!
//! These tests verify:
//! - Round-trip encoding for all entry fields
//! - Self-delimiting decode over concatenated entry streams
//! - Structural failure on truncated or garbage buffers
//! - Edge cases (empty payloads, large payloads, extreme LSNs)

use std::io::Cursor;

use atlaswal::codec::{decode, decode_from, encode, encoded_size};
use atlaswal::{WalEntry, WalError};

// =============================================================================
// Round-Trip Tests
// =============================================================================

#[test]
fn test_encode_decode_round_trip() {
    let entry = WalEntry::new(1, b"hello world".to_vec());

    let bytes = encode(&entry).unwrap();
    let recovered = decode(&bytes).unwrap();

    assert_eq!(recovered.lsn, entry.lsn);
    assert_eq!(recovered.crc, entry.crc);
    assert_eq!(recovered.payload, entry.payload);
}

#[test]
fn test_round_trip_empty_payload() {
    let entry = WalEntry::new(100, vec![]);

    let bytes = encode(&entry).unwrap();
    let recovered = decode(&bytes).unwrap();

    assert_eq!(recovered, entry);
}

#[test]
fn test_round_trip_large_payload() {
    let large_payload = vec![0xAB; 1024 * 1024]; // 1 MB
    let entry = WalEntry::new(999, large_payload.clone());

    let bytes = encode(&entry).unwrap();
    let recovered = decode(&bytes).unwrap();

    assert_eq!(recovered.payload, large_payload);
}

#[test]
fn test_lsn_preserved() {
    for lsn in [0, 1, 255, 256, 12345678901234, u64::MAX] {
        let entry = WalEntry::new(lsn, b"key".to_vec());
        let bytes = encode(&entry).unwrap();
        let recovered = decode(&bytes).unwrap();

        assert_eq!(recovered.lsn, lsn);
    }
}

#[test]
fn test_encode_deterministic() {
    let entry = WalEntry::new(7, b"same input".to_vec());

    assert_eq!(encode(&entry).unwrap(), encode(&entry).unwrap());
}

#[test]
fn test_encoded_size_matches() {
    let entry = WalEntry::new(1, b"test_payload".to_vec());

    let expected = encoded_size(&entry).unwrap();
    let actual = encode(&entry).unwrap();

    assert_eq!(actual.len() as u64, expected);
}

// =============================================================================
// Stream Decoding (self-delimiting framing)
// =============================================================================

#[test]
fn test_decode_from_concatenated_stream() {
    // A segment file is a bare concatenation of encoded entries; each
    // decode_from call must consume exactly one record.
    let entries = vec![
        WalEntry::new(1, b"first".to_vec()),
        WalEntry::new(2, b"second, longer payload".to_vec()),
        WalEntry::new(3, vec![]),
    ];

    let mut buf = Vec::new();
    for entry in &entries {
        buf.extend_from_slice(&encode(entry).unwrap());
    }

    let mut cursor = Cursor::new(buf.as_slice());
    for expected in &entries {
        let recovered = decode_from(&mut cursor).unwrap();
        assert_eq!(&recovered, expected);
    }

    // Stream fully consumed
    assert_eq!(cursor.position() as usize, buf.len());
}

#[test]
fn test_decode_ignores_trailing_bytes() {
    let entry = WalEntry::new(5, b"entry".to_vec());

    let mut bytes = encode(&entry).unwrap();
    bytes.extend_from_slice(b"next record's bytes");

    let recovered = decode(&bytes).unwrap();
    assert_eq!(recovered, entry);
}

// =============================================================================
// Structural Failure Tests
// =============================================================================

#[test]
fn test_truncated_buffer_fails() {
    let entry = WalEntry::new(1, b"some payload".to_vec());
    let bytes = encode(&entry).unwrap();

    let truncated = &bytes[..bytes.len() - 4];
    let result = decode(truncated);

    assert!(matches!(result, Err(WalError::Codec(_))));
}

#[test]
fn test_empty_buffer_fails() {
    let result = decode(&[]);

    assert!(matches!(result, Err(WalError::Codec(_))));
}

#[test]
fn test_header_only_buffer_fails() {
    // lsn intact, buffer ends mid-way through the crc field
    let entry = WalEntry::new(1, b"payload".to_vec());
    let bytes = encode(&entry).unwrap();

    let result = decode(&bytes[..10]);

    assert!(matches!(result, Err(WalError::Codec(_))));
}

#[test]
fn test_decode_from_truncated_stream_fails() {
    let entry = WalEntry::new(1, b"some payload".to_vec());
    let bytes = encode(&entry).unwrap();

    let mut cursor = Cursor::new(&bytes[..bytes.len() / 2]);
    let result = decode_from(&mut cursor);

    assert!(matches!(result, Err(WalError::Codec(_))));
}

#[test]
fn test_structural_failure_is_fatal_class() {
    // Decode failure means the serialization contract was violated,
    // distinct from a CRC mismatch, which is recoverable.
    let err = decode(&[0xDE, 0xAD]).unwrap_err();

    assert!(err.is_fatal());
}
