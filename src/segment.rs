//! Segment addressing
//!
//! Maps a WAL directory to an ordered sequence of segment files.
//!
//! ## Responsibilities
//! - Parse segment identifiers out of on-disk filenames
//! - Find the latest segment in a directory listing (where the log
//!   resumes after restart)
//! - Build canonical paths and create backing files for new segments
//!
//! ## Naming Scheme
//!
//! A segment file is named `segment-<id>`: the literal prefix followed
//! by the decimal identifier, no zero-padding, no suffix (`segment-0`,
//! `segment-17`). The WAL directory must contain nothing else: a
//! foreign filename fails the whole scan rather than being skipped,
//! since it means the directory is corrupted or shared with another
//! application.
//!
//! Identifier lifetime is owned by the caller's rotation logic; this
//! module only discovers the maximum existing identifier and computes
//! paths for new ones. Scans racing a concurrent segment creator are
//! the caller's problem to serialize.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::error::{Result, WalError};

/// Filename prefix shared by every segment file in a WAL directory
pub const SEGMENT_PREFIX: &str = "segment-";

/// Parse a segment identifier from a file path
///
/// Only the final path component is considered, so full paths from a
/// directory walk can be passed as-is.
///
/// Returns `MalformedSegmentName` if the filename is missing the
/// `segment-` prefix or the remainder is not a base-10 non-negative
/// integer.
pub fn parse_segment_id(path: &Path) -> Result<u64> {
    let malformed = || WalError::MalformedSegmentName(path.display().to_string());

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| malformed())?;

    name.strip_prefix(SEGMENT_PREFIX)
        .ok_or_else(|| malformed())?
        .parse::<u64>()
        .map_err(|_| malformed())
}

/// Find the highest segment identifier in a set of filenames
///
/// Returns:
/// - `Ok(max_id)` — the latest segment in the listing
/// - `Ok(0)` — the listing was empty, meaning "no segment yet"; callers
///   that need to distinguish this from "segment 0 exists" should check
///   directory emptiness separately, or use [`latest_segment_in_dir`]
/// - `Err(MalformedSegmentName)` — any single filename failed to parse;
///   one foreign file aborts the whole scan
pub fn latest_segment_id<I, P>(files: I) -> Result<u64>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut last_id = 0;
    for file in files {
        let id = parse_segment_id(file.as_ref())?;
        if id > last_id {
            last_id = id;
        }
    }
    Ok(last_id)
}

/// Scan a WAL directory for its latest segment
///
/// Directory-listing convenience over [`latest_segment_id`] that keeps
/// the empty case unambiguous: `Ok(None)` means the directory holds no
/// segment files at all.
pub fn latest_segment_in_dir(directory: &Path) -> Result<Option<u64>> {
    let mut names = Vec::new();
    for dir_entry in fs::read_dir(directory)? {
        names.push(dir_entry?.path());
    }

    if names.is_empty() {
        return Ok(None);
    }

    latest_segment_id(names).map(Some)
}

/// Canonical path for the segment with the given identifier
///
/// Pure and total; the directory is not checked for existence.
pub fn segment_path(directory: &Path, id: u64) -> PathBuf {
    directory.join(format!("{}{}", SEGMENT_PREFIX, id))
}

/// Create the backing file for a new segment and return a write handle
///
/// Creates, or truncates if it already exists, the file at
/// `segment_path(directory, id)`. This is the single point where a
/// segment's backing file comes into existence; closing (and never
/// deleting) it is the caller's responsibility.
///
/// Filesystem failures (missing directory, permissions, disk full)
/// propagate as ordinary I/O errors for the caller to handle.
pub fn create_segment_file(directory: &Path, id: u64) -> Result<File> {
    let path = segment_path(directory, id);
    let file = File::create(&path)?;
    tracing::debug!(segment = id, path = %path.display(), "created segment file");
    Ok(file)
}
