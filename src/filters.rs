// src/filters.rs
// =============================================================================
// Ready-made filter predicates for the crawl.
//
// A filter is any function from a raw link (the href exactly as written on
// the page) to bool. These cover the common cases; callers can pass their
// own closure instead.
// =============================================================================

use url::Url;

use crate::address::is_well_formed;

/// Keeps every link
pub fn accept_all(_link: &str) -> bool {
    true
}

/// Keeps absolute http/https URLs only
///
/// Drops relative paths, #anchors, mailto:, tel:, javascript: and friends.
pub fn absolute_http_only(link: &str) -> bool {
    is_well_formed(link)
}

/// Keeps absolute http/https URLs whose host matches the crawl domain
///
/// The domain may be given bare ("example.com") or as a URL
/// ("https://example.com/start"). Host comparison ignores case.
pub fn same_domain(domain: &str) -> impl Fn(&str) -> bool {
    let host = host_of(domain);

    move |link: &str| match (&host, Url::parse(link)) {
        (Some(host), Ok(url)) => {
            matches!(url.scheme(), "http" | "https")
                && url.host_str().is_some_and(|h| h.eq_ignore_ascii_case(host))
        }
        _ => false,
    }
}

fn host_of(domain: &str) -> Option<String> {
    let domain = domain.trim();
    let parsed = Url::parse(domain).or_else(|_| Url::parse(&format!("http://{}", domain)));
    parsed.ok()?.host_str().map(str::to_ascii_lowercase)
}
