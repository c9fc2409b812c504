//! Cache module - Manages the local stylesheet copy
//!
//! Provides:
//! - Cache path resolution (<base>/nf-list/nerd-fonts-generated.css)
//! - Freshness checks against the configured TTL
//! - Best-effort cache writes

pub mod store;
