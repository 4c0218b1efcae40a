//! AtlasWAL Inspect Binary
//!
//! Read-only diagnostic for a WAL directory: reports the latest segment
//! and replays one segment entry-by-entry, showing where the durable
//! log ends.

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use atlaswal::{decode_verified_from, latest_segment_in_dir, segment_path, WalError};

/// AtlasWAL Inspect
#[derive(Parser, Debug)]
#[command(name = "atlaswal-inspect")]
#[command(about = "Inspect and verify write-ahead log segments")]
#[command(version)]
struct Args {
    /// WAL directory to inspect
    #[arg(short, long, default_value = "./wal")]
    wal_dir: PathBuf,

    /// Segment ID to replay (defaults to the latest segment)
    #[arg(short, long)]
    segment: Option<u64>,
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,atlaswal=debug"));

    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();

    tracing::info!("AtlasWAL Inspect v{}", atlaswal::VERSION);
    tracing::info!("WAL directory: {}", args.wal_dir.display());

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("inspection failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> atlaswal::Result<()> {
    // Pick the segment to replay: explicit ID, or whatever the scan says
    // is latest.
    let segment = match args.segment {
        Some(id) => id,
        None => match latest_segment_in_dir(&args.wal_dir)? {
            Some(id) => id,
            None => {
                tracing::info!("directory holds no segments");
                return Ok(());
            }
        },
    };

    let path = segment_path(&args.wal_dir, segment);
    tracing::info!("replaying {}", path.display());

    let buf = fs::read(&path)?;
    let mut cursor = Cursor::new(buf.as_slice());

    let mut entries = 0u64;
    let mut last_lsn = None;

    while (cursor.position() as usize) < buf.len() {
        match decode_verified_from(&mut cursor) {
            Ok(entry) => {
                tracing::debug!(lsn = entry.lsn, bytes = entry.payload.len(), "entry ok");
                entries += 1;
                last_lsn = Some(entry.lsn);
            }
            Err(e @ WalError::CrcMismatch { .. }) => {
                // Normal end of the durable log after an unclean shutdown.
                tracing::warn!("replay halted: {}", e);
                break;
            }
            Err(e) => return Err(e),
        }
    }

    match last_lsn {
        Some(lsn) => tracing::info!(
            "segment {}: {} verified entries, last lsn {}",
            segment,
            entries,
            lsn
        ),
        None => tracing::info!("segment {}: empty", segment),
    }

    Ok(())
}
