//! Error types for fetching and decoding

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NfError {
    #[error("failed to fetch stylesheet from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("failed to read cached stylesheet {path}: {source}")]
    CacheRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid codepoint \\{hex}: {reason}")]
    Decode { hex: String, reason: String },
}

pub type Result<T> = std::result::Result<T, NfError>;
