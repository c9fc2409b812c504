//! Backends module - Where the stylesheet comes from
//!
//! This module provides:
//! - HTTP source (blocking reqwest)
//! - Fetcher combining the cache and a source

pub mod fetch;
pub mod http;
