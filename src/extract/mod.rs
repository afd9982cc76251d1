// src/extract/mod.rs
// =============================================================================
// This module turns a fetched page into the set of links it points to.
//
// Submodules:
// - html: Pulls the raw href values out of an HTML document
// - links: Applies the status check, the caller's filter and scheme
//          canonicalization to those raw values
//
// Rust concepts:
// - pub use: Re-export items so callers can write `extract::extract_links`
// =============================================================================

mod html;
mod links;

use reqwest::StatusCode;

pub use html::anchor_targets;
pub use links::extract_links;

/// The outcome of fetching one page: its HTTP status and raw body
///
/// Consumed right away by the link extractor, never stored.
#[derive(Debug, Clone)]
pub struct PageResult {
    pub status: StatusCode,
    pub body: String,
}

impl PageResult {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Shorthand for a 200 OK page
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, body)
    }
}
