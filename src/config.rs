// src/config.rs
// =============================================================================
// Crawl settings.
//
// CrawlConfig groups the knobs of a crawl in one place. The CLI fills it in
// from command-line flags; library callers usually start from
// CrawlConfig::default() and change what they need.
// =============================================================================

use std::time::Duration;

/// Depth used when the caller does not pick one
pub const DEFAULT_DEPTH: usize = 5;

/// What to do when a page in a level cannot be fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Abort the whole crawl with the fetch error (no partial result)
    #[default]
    FailFast,
    /// Log the failure and treat the page as having no links
    Tolerant,
}

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Number of link-following hops from the seed page
    pub depth: usize,
    pub failure_policy: FailurePolicy,
    /// Upper bound on fetches in flight within one level.
    /// None = fetch the whole frontier at once.
    pub max_concurrent_fetches: Option<usize>,
    /// Per-request timeout for the HTTP fetcher
    pub timeout: Duration,
    /// Redirects the HTTP fetcher follows before giving up
    pub max_redirects: usize,
    pub user_agent: String,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            failure_policy: FailurePolicy::FailFast,
            max_concurrent_fetches: None,
            timeout: Duration::from_secs(10),
            max_redirects: 5,
            user_agent: format!("hopcrawl/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CrawlConfig::default();
        assert_eq!(config.depth, 5);
        assert_eq!(config.failure_policy, FailurePolicy::FailFast);
        assert_eq!(config.max_concurrent_fetches, None);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("hopcrawl/"));
    }
}
