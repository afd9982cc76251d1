// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use std::time::Duration;

use clap::{Parser, Subcommand};
use hopcrawl::{CrawlConfig, FailurePolicy, DEFAULT_DEPTH};

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "hopcrawl",
    version,
    about = "Discover the links reachable from a domain, level by level",
    long_about = "hopcrawl fetches http://<domain>, collects the links on it, then follows them \
                  one level at a time up to the chosen depth. Every address found is reported once."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl a domain and list the addresses found
    ///
    /// Example: hopcrawl crawl example.com --depth 2 --same-domain
    Crawl {
        /// Domain to start from (e.g., example.com)
        ///
        /// "http://" is added in front of it
        domain: String,

        /// Number of levels to crawl
        ///
        /// Depth 0 = report the seed address without fetching anything
        /// Depth 1 = fetch the seed page and report its links
        /// Depth 2 = also fetch the pages those links point to
        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth: usize,

        /// Output results in JSON format instead of a table
        #[arg(long)]
        json: bool,

        /// Only follow links on the same host as the domain
        ///
        /// Without this flag every absolute http(s) link is followed
        #[arg(long)]
        same_domain: bool,

        /// Keep crawling when a page cannot be fetched
        ///
        /// By default the first failed fetch aborts the crawl
        #[arg(long)]
        keep_going: bool,

        /// Maximum number of pages fetched at the same time within a level
        #[arg(long)]
        concurrency: Option<usize>,

        /// Request timeout in seconds
        #[arg(long, default_value_t = 10)]
        timeout: u64,
    },
}

// Builds the crawl configuration from the parsed flags
pub fn crawl_config(depth: usize, keep_going: bool, concurrency: Option<usize>, timeout: u64) -> CrawlConfig {
    CrawlConfig {
        depth,
        failure_policy: if keep_going {
            FailurePolicy::Tolerant
        } else {
            FailurePolicy::FailFast
        },
        max_concurrent_fetches: concurrency,
        timeout: Duration::from_secs(timeout),
        ..CrawlConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::parse_from(["hopcrawl", "crawl", "example.com"]);
        match cli.command {
            Commands::Crawl { domain, depth, json, same_domain, keep_going, concurrency, timeout } => {
                assert_eq!(domain, "example.com");
                assert_eq!(depth, 5);
                assert!(!json);
                assert!(!same_domain);
                assert!(!keep_going);
                assert_eq!(concurrency, None);
                assert_eq!(timeout, 10);
            }
        }
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "hopcrawl", "crawl", "example.com", "--depth", "2", "--json", "--same-domain", "--keep-going",
            "--concurrency", "8", "--timeout", "3",
        ]);
        let Commands::Crawl { depth, json, same_domain, keep_going, concurrency, timeout, .. } = cli.command;
        assert_eq!(depth, 2);
        assert!(json && same_domain && keep_going);
        assert_eq!(concurrency, Some(8));
        assert_eq!(timeout, 3);
    }

    #[test]
    fn test_crawl_config_from_flags() {
        let config = crawl_config(3, true, Some(4), 7);
        assert_eq!(config.depth, 3);
        assert_eq!(config.failure_policy, FailurePolicy::Tolerant);
        assert_eq!(config.max_concurrent_fetches, Some(4));
        assert_eq!(config.timeout, Duration::from_secs(7));

        let config = crawl_config(1, false, None, 10);
        assert_eq!(config.failure_policy, FailurePolicy::FailFast);
    }
}
