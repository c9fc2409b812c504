//! Cache store - Read/write the cached stylesheet

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use crate::core::error::{NfError, Result};
use crate::core::util::{file_age, format_mtime};

/// Cache subdirectory and file names
pub const CACHE_SUBDIR: &str = "nf-list";
pub const CACHE_FILE: &str = "nerd-fonts-generated.css";

/// Path of the cached stylesheet under a cache base directory
pub fn cache_path(base: &Path) -> PathBuf {
    base.join(CACHE_SUBDIR).join(CACHE_FILE)
}

/// Check if the cached file exists and is no older than `ttl`
pub fn is_fresh(path: &Path, ttl: Duration, now: SystemTime) -> bool {
    match file_age(path, now) {
        Ok(age) => {
            log::debug!(
                "cache {} last written {} ({}s old, ttl {}s)",
                path.display(),
                format_mtime(path).unwrap_or_else(|| "?".to_string()),
                age.as_secs(),
                ttl.as_secs()
            );
            age <= ttl
        }
        Err(_) => false,
    }
}

/// Read the cached stylesheet
pub fn read_cache(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| NfError::CacheRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the cached stylesheet only if it is fresh.
///
/// A read failure on a fresh file is logged and treated as a miss.
pub fn read_if_fresh(path: &Path, ttl: Duration, now: SystemTime) -> Option<String> {
    if !is_fresh(path, ttl, now) {
        log::debug!("cache miss: {}", path.display());
        return None;
    }

    match read_cache(path) {
        Ok(content) => {
            log::debug!("cache hit: {}", path.display());
            Some(content)
        }
        Err(e) => {
            log::warn!("{}; fetching instead", e);
            None
        }
    }
}

/// Write the stylesheet to the cache, creating parent directories.
/// Failures are logged and otherwise ignored.
pub fn write_best_effort(path: &Path, bytes: &[u8]) {
    if let Err(e) = write_cache(path, bytes) {
        log::warn!("failed to write cache {}: {}", path.display(), e);
    }
}

fn write_cache(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)
}
