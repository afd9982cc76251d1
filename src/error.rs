// src/error.rs
// =============================================================================
// Error types for the crawl library.
//
// There are two ways a crawl can fail:
// - The seed domain does not form a valid address (InvalidAddress)
// - A page could not be fetched at all (Fetch)
// (plus Client, when the default HTTP fetcher cannot even be built)
//
// A page that answers with a bad status (404, 500...) is NOT an error here.
// The link extractor logs it and treats the page as having no links.
//
// Rust concepts:
// - thiserror: derive std::error::Error and Display from attributes
// - #[from]: lets the ? operator convert a FetchError into a CrawlError
// =============================================================================

use thiserror::Error;

/// Errors returned by a crawl call
#[derive(Debug, Error)]
pub enum CrawlError {
    /// The seed domain did not produce a well-formed URL.
    /// Nothing was fetched.
    #[error("invalid address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    /// A page fetch failed and the crawl was aborted.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The HTTP client could not be set up
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// What kind of transport failure happened while fetching a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Timeout,
    Dns,
    Connect,
    Tls,
    Redirect,
    Body,
    Other,
}

/// A page could not be fetched (network or transport failure)
#[derive(Debug, Clone, Error)]
#[error("failed to fetch {address}: {message}")]
pub struct FetchError {
    pub address: String,
    pub kind: FetchErrorKind,
    pub message: String,
}

impl FetchError {
    pub fn new(address: impl Into<String>, kind: FetchErrorKind, message: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            kind,
            message: message.into(),
        }
    }
}
