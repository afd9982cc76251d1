// src/crawl/mod.rs
// =============================================================================
// This module handles crawling a domain.
//
// Submodules:
// - fetch: The PageFetcher trait and the reqwest-backed HttpFetcher
// - engine: The level-by-level crawl (visited set, frontier, depth bound)
//
// Features:
// - Breadth-first crawling, one level at a time
// - Every page of a level is fetched concurrently
// - Configurable depth limit and failure policy
// - Pages are never fetched twice
// =============================================================================

mod engine;
mod fetch;

pub use engine::{crawl, CrawlReport, Crawler, LevelReport};
pub use fetch::{HttpFetcher, PageFetcher};
