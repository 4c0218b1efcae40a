//! Error types for AtlasWAL
//!
//! Provides a unified error type for all operations, split into two
//! classes:
//!
//! - **Recoverable**: a CRC mismatch during replay (the expected shape of
//!   a partially written tail after a crash), or an I/O failure from the
//!   filesystem. Callers handle these: stop replay, retry, alert.
//! - **Fatal**: a structural codec failure or a foreign filename inside
//!   the log directory. These mean an invariant assumed to always hold
//!   has been violated; there is no well-defined recovery. The library
//!   still returns them as values; `is_fatal()` lets the caller decide
//!   whether to escalate to a process abort.

use thiserror::Error;

/// Result type alias using WalError
pub type Result<T> = std::result::Result<T, WalError>;

/// Unified error type for AtlasWAL operations
#[derive(Debug, Error)]
pub enum WalError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Integrity Errors (recoverable: stop replay here)
    // -------------------------------------------------------------------------
    #[error("CRC mismatch at lsn {lsn}: data may be corrupted (stored {stored:#010x}, computed {computed:#010x})")]
    CrcMismatch {
        /// Sequence number of the entry that failed verification
        lsn: u64,
        /// Checksum carried in the entry
        stored: u32,
        /// Checksum recomputed from the entry contents
        computed: u32,
    },

    // -------------------------------------------------------------------------
    // Codec Errors (fatal: serialization contract violated)
    // -------------------------------------------------------------------------
    #[error("entry codec failure: {0}")]
    Codec(String),

    // -------------------------------------------------------------------------
    // Segment Errors (fatal: foreign file in the log directory)
    // -------------------------------------------------------------------------
    #[error("malformed segment filename: {0:?}")]
    MalformedSegmentName(String),
}

impl WalError {
    /// Whether this error is a broken invariant rather than an expected
    /// runtime condition.
    ///
    /// Returns:
    /// - `true` — codec failures and malformed segment names; these can
    ///   only occur if the serialization contract or the directory layout
    ///   was violated. Callers typically convert them into a
    ///   process-level abort.
    /// - `false` — CRC mismatches and I/O errors; both are expected
    ///   failure modes the caller is equipped to handle.
    pub fn is_fatal(&self) -> bool {
        matches!(self, WalError::Codec(_) | WalError::MalformedSegmentName(_))
    }
}
