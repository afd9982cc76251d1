// src/main.rs
// =============================================================================
// This is the entry point of the hopcrawl CLI.
//
// What happens here:
// 1. Set up logging (tracing, to stderr, controlled by RUST_LOG)
// 2. Parse command-line arguments using clap
// 3. Run the crawl through the library
// 4. Print the addresses found as a table or JSON
// 5. Exit with proper code (0 = success, 2 = error)
// =============================================================================

mod cli;

use std::collections::HashSet;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use hopcrawl::{filters, CrawlReport, Crawler, LevelReport};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,hopcrawl=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Crawl { domain, depth, json, same_domain, keep_going, concurrency, timeout } => {
            let config = cli::crawl_config(depth, keep_going, concurrency, timeout);
            handle_crawl(&domain, config, json, same_domain).await
        }
    }
}

// Handles the 'crawl' subcommand
async fn handle_crawl(domain: &str, config: hopcrawl::CrawlConfig, json: bool, same_domain: bool) -> Result<i32> {
    let depth = config.depth;
    let crawler = Crawler::http(config)?;

    if !json {
        println!("🔍 Crawling: {}", domain);
        println!("📊 Depth: {}", depth);
    }

    let report = if same_domain {
        crawler.crawl_report(domain, depth, filters::same_domain(domain)).await
    } else {
        crawler.crawl_report(domain, depth, filters::absolute_http_only).await
    }
    .with_context(|| format!("crawl of '{}' failed", domain))?;

    print_report(&report, json)?;
    Ok(0)
}

// JSON view of a report, with the addresses sorted for stable output
#[derive(Serialize)]
struct JsonReport<'a> {
    seed: &'a str,
    addresses: Vec<&'a str>,
    levels: &'a [LevelReport],
}

fn sorted(visited: &HashSet<String>) -> Vec<&str> {
    let mut addresses: Vec<&str> = visited.iter().map(String::as_str).collect();
    addresses.sort_unstable();
    addresses
}

fn print_report(report: &CrawlReport, json: bool) -> Result<()> {
    if json {
        let output = JsonReport {
            seed: &report.seed,
            addresses: sorted(&report.visited),
            levels: &report.levels,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_table(report);
    }
    Ok(())
}

fn print_table(report: &CrawlReport) {
    println!();
    println!("{:<8} {:<10} {:<12} {:<8} {:<8}", "LEVEL", "FETCHED", "DISCOVERED", "NEW", "FAILED");
    println!("{}", "=".repeat(50));
    for level in &report.levels {
        println!(
            "{:<8} {:<10} {:<12} {:<8} {:<8}",
            level.level, level.fetched, level.discovered, level.new, level.failed
        );
    }

    println!();
    for address in sorted(&report.visited) {
        println!("   {}", address);
    }

    println!();
    println!("📋 Total: {} address(es) from {}", report.visited.len(), report.seed);
}
