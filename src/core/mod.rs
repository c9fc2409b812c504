//! Core module - Glyph data model and the parse/filter/render pipeline
//!
//! This module provides:
//! - The glyph record model
//! - Stylesheet parsing
//! - Keyword/group filtering and random selection
//! - Rendering to plain, compact and JSON output
//! - Error types shared by the fetcher and the command layer

pub mod error;
pub mod filter;
pub mod model;
pub mod parse;
pub mod render;
pub mod util;
