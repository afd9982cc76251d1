// src/crawl/engine.rs
// =============================================================================
// This module implements the crawl itself: a level-by-level breadth-first
// traversal starting from a seed address.
//
// How it works:
// 1. Build and validate the seed address ("example.com" -> "http://example.com")
// 2. depth 0: the answer is just the seed, nothing is fetched
// 3. Fetch the seed page; its links become both the visited set and the
//    first frontier
// 4. For each further level:
//    - Stop if the frontier is empty
//    - Fetch every frontier page concurrently and wait for all of them
//    - Union the links from those pages
//    - New frontier = that union minus everything visited so far
//    - Add the union to the visited set
// 5. Return the visited set
//
// The fetch futures only read the fetcher and the filter. Each returns its
// own HashSet, and all set updates happen here after the level's barrier,
// so no locks are needed.
//
// Rust concepts:
// - HashSet: visited set and frontier (O(1) membership)
// - futures::stream: buffer_unordered runs many fetches at once,
//   collect/try_collect waits for all of them (the level barrier)
// - Generics: the fetcher and the filter are type parameters
// =============================================================================

use std::collections::HashSet;

use futures::stream::{self, StreamExt, TryStreamExt};
use serde::Serialize;

use super::fetch::{HttpFetcher, PageFetcher};
use crate::address::{same_page, seed_address, Address};
use crate::config::{CrawlConfig, FailurePolicy};
use crate::error::{CrawlError, FetchError};
use crate::extract::{extract_links, PageResult};

/// What happened at one level of the crawl
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelReport {
    /// 0 for the seed page, then 1, 2, ...
    pub level: usize,
    /// Pages fetched at this level
    pub fetched: usize,
    /// Distinct links found on those pages
    pub discovered: usize,
    /// Links not seen before, queued for the next level
    pub new: usize,
    /// Fetches that failed (only non-zero in tolerant mode)
    pub failed: usize,
}

/// Full result of a crawl: the visited set plus a record per level
#[derive(Debug, Clone, Serialize)]
pub struct CrawlReport {
    pub seed: Address,
    pub visited: HashSet<Address>,
    pub levels: Vec<LevelReport>,
}

/// Drives crawls with a given fetcher and configuration
pub struct Crawler<P> {
    fetcher: P,
    config: CrawlConfig,
}

impl Crawler<HttpFetcher> {
    /// A crawler that fetches over HTTP, configured from `config`
    pub fn http(config: CrawlConfig) -> Result<Self, CrawlError> {
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self::new(fetcher, config))
    }
}

impl<P: PageFetcher> Crawler<P> {
    pub fn new(fetcher: P, config: CrawlConfig) -> Self {
        Self { fetcher, config }
    }

    /// Crawls `domain` for `depth` levels and returns every discovered address
    pub async fn crawl<F>(&self, domain: &str, depth: usize, filter: F) -> Result<HashSet<Address>, CrawlError>
    where
        F: Fn(&str) -> bool + Sync,
    {
        Ok(self.crawl_report(domain, depth, filter).await?.visited)
    }

    /// Same as `crawl`, but also returns per-level statistics
    pub async fn crawl_report<F>(&self, domain: &str, depth: usize, filter: F) -> Result<CrawlReport, CrawlError>
    where
        F: Fn(&str) -> bool + Sync,
    {
        let seed = seed_address(domain)?;

        if depth == 0 {
            return Ok(CrawlReport {
                visited: HashSet::from([seed.clone()]),
                seed,
                levels: Vec::new(),
            });
        }

        tracing::info!(url = %seed, depth, "Starting crawl");

        // The seed page is fatal to lose regardless of the failure policy
        let page = self.fetcher.fetch(&seed).await?;
        let seed_links = links_on_page(&seed, &page, &filter);

        let mut visited = seed_links.clone();
        let mut frontier: HashSet<Address> = seed_links
            .into_iter()
            .filter(|link| !same_page(link, &seed))
            .collect();

        let mut levels = vec![LevelReport {
            level: 0,
            fetched: 1,
            discovered: visited.len(),
            new: frontier.len(),
            failed: 0,
        }];

        for level in 1..depth {
            if frontier.is_empty() {
                tracing::debug!(level, "Frontier is empty, stopping early");
                break;
            }

            let fetched = frontier.len();
            let (combined, failed) = self.fetch_level(&frontier, &filter).await?;

            // Difference against the visited set as it was before this level
            let next: HashSet<Address> = combined
                .difference(&visited)
                .filter(|link| !same_page(link, &seed))
                .cloned()
                .collect();

            let report = LevelReport {
                level,
                fetched,
                discovered: combined.len(),
                new: next.len(),
                failed,
            };
            tracing::debug!(
                level,
                fetched = report.fetched,
                discovered = report.discovered,
                new = report.new,
                failed = report.failed,
                "Level complete"
            );
            levels.push(report);

            visited.extend(combined);
            frontier = next;
        }

        tracing::info!(url = %seed, visited = visited.len(), levels = levels.len(), "Crawl completed");

        Ok(CrawlReport { seed, visited, levels })
    }

    // Fetches and extracts every frontier page, waiting for all of them
    //
    // Returns the union of the links found and the number of failed fetches.
    async fn fetch_level<F>(&self, frontier: &HashSet<Address>, filter: &F) -> Result<(HashSet<Address>, usize), CrawlError>
    where
        F: Fn(&str) -> bool + Sync,
    {
        let in_flight = self
            .config
            .max_concurrent_fetches
            .unwrap_or(frontier.len())
            .max(1);

        let tasks = frontier.iter().map(move |address| async move {
            let page = self.fetcher.fetch(address).await?;
            Ok::<_, FetchError>(links_on_page(address, &page, filter))
        });
        let results = stream::iter(tasks).buffer_unordered(in_flight);

        let mut combined = HashSet::new();
        let mut failed = 0;

        match self.config.failure_policy {
            FailurePolicy::FailFast => {
                let sets: Vec<HashSet<Address>> = results.try_collect().await?;
                combined.extend(sets.into_iter().flatten());
            }
            FailurePolicy::Tolerant => {
                let outcomes: Vec<Result<HashSet<Address>, FetchError>> = results.collect().await;
                for outcome in outcomes {
                    match outcome {
                        Ok(links) => combined.extend(links),
                        Err(e) => {
                            tracing::warn!(url = %e.address, error = %e, "Fetch failed, continuing without this page");
                            failed += 1;
                        }
                    }
                }
            }
        }

        Ok((combined, failed))
    }
}

// Runs the link extractor inside a span naming the page, so its
// diagnostics (e.g. a non-200 status) carry the address
fn links_on_page<F>(address: &str, page: &PageResult, filter: &F) -> HashSet<Address>
where
    F: Fn(&str) -> bool,
{
    tracing::info_span!("page", url = %address).in_scope(|| extract_links(page, filter))
}

/// Crawls `domain` over HTTP with the default configuration
///
/// Example:
///   crawl("example.com", DEFAULT_DEPTH, filters::same_domain("example.com")).await
pub async fn crawl<F>(domain: &str, depth: usize, filter: F) -> Result<HashSet<Address>, CrawlError>
where
    F: Fn(&str) -> bool + Sync,
{
    Crawler::http(CrawlConfig::default())?
        .crawl(domain, depth, filter)
        .await
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why level by level instead of a queue?
//    - Every page at one level is fetched before any page at the next
//    - The frontier for level i+1 is known exactly once level i is done,
//      so a link found on several pages is fetched only once
//
// 2. Why is the seed kept out of the frontier?
//    - The seed page was fetched first; pages that link back to it must not
//      trigger a second fetch. It only ends up in the result if some page
//      links to it.
//
// 3. buffer_unordered + try_collect
//    - buffer_unordered(n) polls up to n fetches at once, yielding results
//      as they finish (any order)
//    - try_collect stops at the first Err, dropping the fetches still in
//      flight. That is the fail-fast policy.
// -----------------------------------------------------------------------------
