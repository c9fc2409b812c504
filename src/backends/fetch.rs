//! Fetcher - Cached stylesheet retrieval
//!
//! Returns the cached stylesheet while it is fresh, otherwise downloads it
//! and refreshes the cache.

use std::time::SystemTime;

use crate::backends::http::StylesheetSource;
use crate::cache::store::{cache_path, read_if_fresh, write_best_effort};
use crate::config::CacheConfig;
use crate::core::error::Result;

/// Fetch the stylesheet text, using the cache when possible
pub fn fetch_stylesheet(config: &CacheConfig, source: &dyn StylesheetSource) -> Result<String> {
    fetch_stylesheet_at(config, source, SystemTime::now())
}

/// Same as [`fetch_stylesheet`] with an explicit clock
pub fn fetch_stylesheet_at(
    config: &CacheConfig,
    source: &dyn StylesheetSource,
    now: SystemTime,
) -> Result<String> {
    let path = cache_path(&config.base_dir);

    if config.refresh {
        log::debug!("--refresh set, bypassing cache");
    } else if let Some(content) = read_if_fresh(&path, config.ttl, now) {
        return Ok(content);
    }

    let bytes = source.get(&config.url)?;
    write_best_effort(&path, &bytes);

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
