//! Common utilities

use std::path::Path;
use std::time::{Duration, SystemTime};
use xxhash_rust::xxh3::xxh3_64;

/// Age of a file according to its modification time.
/// A modification time in the future counts as zero age.
pub fn file_age(path: &Path, now: SystemTime) -> std::io::Result<Duration> {
    let mtime = std::fs::metadata(path)?.modified()?;
    Ok(now.duration_since(mtime).unwrap_or_default())
}

/// Format a modification time for log output
pub fn format_mtime(path: &Path) -> Option<String> {
    let mtime = std::fs::metadata(path).ok()?.modified().ok()?;
    let local: chrono::DateTime<chrono::Local> = mtime.into();
    Some(local.format("%Y-%m-%d %H:%M:%S").to_string())
}

/// Seed for random selection, derived from the clock and the process id
pub fn random_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();

    let mut buf = [0u8; 20];
    buf[..16].copy_from_slice(&nanos.to_le_bytes());
    buf[16..].copy_from_slice(&std::process::id().to_le_bytes());
    xxh3_64(&buf)
}
