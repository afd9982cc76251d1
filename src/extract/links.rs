// src/extract/links.rs
// =============================================================================
// The link extractor: page in, set of normalized links out.
//
// Steps:
// 1. Pages that did not answer 200 OK contribute no links (logged, not fatal)
// 2. Collect every anchor's href (see html.rs)
// 3. Trim each href, drop anchors with no href or an empty one
// 4. Keep only the candidates the caller's filter accepts
// 5. Canonicalize the scheme to http and collect into a HashSet
//
// Rust concepts:
// - Generic closures: the filter is any Fn(&str) -> bool
// - Iterator chains: filter_map/filter/map/collect
// =============================================================================

use std::collections::HashSet;

use reqwest::StatusCode;

use super::html::anchor_targets;
use super::PageResult;
use crate::address::{canonicalize, Address};

// Extracts the filtered, canonicalized links found on one page
//
// Parameters:
//   page: the fetched page (status + body)
//   filter: caller predicate applied to each raw href before it is kept
//
// Returns: the set of surviving links. Duplicates (including http/https
// variants of the same link) collapse into one entry.
pub fn extract_links<F>(page: &PageResult, filter: &F) -> HashSet<Address>
where
    F: Fn(&str) -> bool + ?Sized,
{
    if page.status != StatusCode::OK {
        tracing::warn!(status = %page.status, "Page did not return 200 OK, skipping its links");
        return HashSet::new();
    }

    anchor_targets(&page.body)
        .into_iter()
        .flatten()
        .filter_map(|href| {
            // Padding around the href is not part of the link
            let href = href.trim();
            (!href.is_empty() && filter(href)).then(|| canonicalize(href))
        })
        .collect()
}
