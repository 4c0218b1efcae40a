//! Entry codec
//!
//! Serialization boundary between a [`WalEntry`] and its on-disk bytes,
//! built on bincode's fixed-width encoding.
//!
//! ## Wire Format
//!
//! ```text
//! ┌─────────┬─────────┬────────────────┬─────────────────┐
//! │ LSN (8) │ CRC (4) │ PayloadLen (8) │ Payload (bytes) │
//! └─────────┴─────────┴────────────────┴─────────────────┘
//! ```
//!
//! The encoding is self-delimiting: a segment file is a bare
//! concatenation of encoded entries with no outer framing, and
//! [`decode_from`] peels exactly one entry off the front of a stream.
//!
//! ## Failure Semantics
//!
//! Both directions treat failure as a broken invariant, not a runtime
//! condition. Encoding a well-formed entry cannot fail, and bytes handed
//! to decode are expected to have come from a prior successful encode,
//! so a structural parse failure means something other than a WAL segment
//! was fed in (or a write was torn mid-record). Either way the result is
//! [`WalError::Codec`], which reports `is_fatal() == true` so callers
//! can escalate. Content corruption inside a structurally intact entry
//! is not detected here; that is the integrity verifier's job.

use std::io::Read;

use crate::entry::WalEntry;
use crate::error::{Result, WalError};

/// Encode an entry to its serialized byte representation
///
/// Deterministic for a given entry.
pub fn encode(entry: &WalEntry) -> Result<Vec<u8>> {
    bincode::serialize(entry)
        .map_err(|e| WalError::Codec(format!("encode should never fail: {}", e)))
}

/// Decode a single entry from a byte buffer
///
/// Trailing bytes beyond the first entry are ignored; use
/// [`decode_from`] to walk a concatenated stream.
pub fn decode(bytes: &[u8]) -> Result<WalEntry> {
    bincode::deserialize(bytes).map_err(|e| {
        WalError::Codec(format!(
            "decode failed on {}-byte buffer: {}",
            bytes.len(),
            e
        ))
    })
}

/// Decode the next entry from a reader, consuming exactly one record
pub fn decode_from<R: Read>(reader: &mut R) -> Result<WalEntry> {
    bincode::deserialize_from(reader)
        .map_err(|e| WalError::Codec(format!("decode failed mid-stream: {}", e)))
}

/// Serialized size of an entry in bytes
pub fn encoded_size(entry: &WalEntry) -> Result<u64> {
    bincode::serialized_size(entry)
        .map_err(|e| WalError::Codec(format!("size computation should never fail: {}", e)))
}
