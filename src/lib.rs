// src/lib.rs
// =============================================================================
// hopcrawl: discover the links reachable from a domain, level by level.
//
// Starting from "http://<domain>", the crawler fetches the page, extracts its
// links, keeps the ones the caller's filter accepts, and repeats for a fixed
// number of levels. The result is the set of every address found.
//
// Modules:
// - address: canonical "http" addresses and URL validation
// - extract: page -> set of filtered, canonicalized links
// - crawl: page fetching and the level-by-level engine
// - filters: ready-made filter predicates
// - config: CrawlConfig and FailurePolicy
// - error: CrawlError and FetchError
//
// Example:
//   let links = hopcrawl::crawl("example.com", 2, hopcrawl::filters::same_domain("example.com")).await?;
// =============================================================================

pub mod address;
pub mod config;
pub mod crawl;
pub mod error;
pub mod extract;
pub mod filters;

pub use address::{canonicalize, is_well_formed, Address};
pub use config::{CrawlConfig, FailurePolicy, DEFAULT_DEPTH};
pub use crawl::{crawl, CrawlReport, Crawler, HttpFetcher, LevelReport, PageFetcher};
pub use error::{CrawlError, FetchError, FetchErrorKind};
pub use extract::{extract_links, PageResult};
