//! WAL Entry definitions
//!
//! Defines the structure of individual WAL log entries.
//!
//! An entry is immutable once constructed: the writer builds it with
//! [`WalEntry::new`] (which seals the checksum in), the reader rebuilds
//! it by decoding and hands it straight to the integrity verifier.

use serde::{Deserialize, Serialize};

use crate::integrity;

/// A single entry in the WAL
///
/// Field order is part of the on-disk format: the codec serializes the
/// struct as declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalEntry {
    /// Log Sequence Number - monotonically non-decreasing
    pub lsn: u64,

    /// CRC32 (IEEE) over the payload followed by the low byte of the LSN
    pub crc: u32,

    /// Opaque record payload; semantics belong to the caller's schema
    pub payload: Vec<u8>,
}

impl WalEntry {
    /// Create an entry at append time, computing its checksum
    pub fn new(lsn: u64, payload: Vec<u8>) -> Self {
        let crc = integrity::checksum(&payload, lsn);
        Self { lsn, crc, payload }
    }

    /// Recompute the checksum from the current payload and LSN
    pub fn compute_crc(&self) -> u32 {
        integrity::checksum(&self.payload, self.lsn)
    }

    /// Check the stored checksum against a fresh recomputation
    pub fn verify(&self) -> bool {
        self.crc == self.compute_crc()
    }
}
