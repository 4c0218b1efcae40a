//! # AtlasWAL
//!
//! The framing and integrity core of a write-ahead log:
//! - Entry codec: self-delimiting binary serialization of log entries
//! - Integrity verification: CRC32 corruption detection on the read path
//! - Segment addressing: mapping a log directory to ordered segment files
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Segment Manager (caller)                    │
//! │        rotation · group commit · fsync · locking            │
//! └──────────┬────────────────────────────────────┬─────────────┘
//!            │ append path                        │ startup / rotation
//!            ▼                                    ▼
//!     ┌─────────────┐                      ┌─────────────┐
//!     │ Entry Codec │                      │   Segment   │
//!     │  (encode)   │                      │   Locator   │
//!     └─────────────┘                      └─────────────┘
//!            │ replay path
//!            ▼
//!     ┌─────────────┐       ┌─────────────┐
//!     │ Entry Codec │──────▶│  Integrity  │──▶ verified entries
//!     │  (decode)   │       │  Verifier   │
//!     └─────────────┘       └─────────────┘
//! ```
//!
//! Every operation is a pure function of its inputs; the crate keeps no
//! process-wide state, so concurrent use needs no synchronization. The
//! caller owns all policy: when to rotate, when to sync, when to stop
//! replaying.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;

pub mod entry;
pub mod codec;
pub mod integrity;
pub mod segment;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, WalError};

pub use entry::WalEntry;
pub use integrity::{checksum, decode_verified, decode_verified_from, verify};
pub use segment::{
    create_segment_file, latest_segment_id, latest_segment_in_dir, parse_segment_id, segment_path,
    SEGMENT_PREFIX,
};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of AtlasWAL
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
