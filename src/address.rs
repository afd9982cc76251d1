// src/address.rs
// =============================================================================
// Helpers for working with addresses (absolute URL strings).
//
// Every address we store is canonicalized to the plain "http" scheme, so
// http://example.com/a and https://example.com/a count as the same page.
//
// Rust concepts:
// - Type aliases: Address is just a String with a more descriptive name
// - Result<T, E>: seed construction can fail with CrawlError::InvalidAddress
// =============================================================================

use url::Url;

use crate::error::CrawlError;

/// An absolute URL string, always stored with the "http" scheme
pub type Address = String;

const SECURE_PREFIX: &str = "https:";
const CANONICAL_PREFIX: &str = "http:";

// Rewrites a leading "https:" to "http:"
//
// Anything else (relative paths, mailto:, already-http URLs) comes back
// unchanged, so calling this twice gives the same result as calling it once.
//
// Example:
//   "https://example.com/a" -> "http://example.com/a"
//   "/relative"             -> "/relative"
pub fn canonicalize(address: &str) -> Address {
    match address.get(..SECURE_PREFIX.len()) {
        Some(scheme) if scheme.eq_ignore_ascii_case(SECURE_PREFIX) => {
            format!("{}{}", CANONICAL_PREFIX, &address[SECURE_PREFIX.len()..])
        }
        _ => address.to_string(),
    }
}

// Checks that a string is an absolute http(s) URL with a host
pub fn is_well_formed(address: &str) -> bool {
    match Url::parse(address) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && url.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}

// Checks whether two addresses name the same page
//
// Compares the parsed URLs, so "http://example.com" and "http://example.com/"
// match. Strings that do not parse only match themselves.
pub fn same_page(a: &str, b: &str) -> bool {
    match (Url::parse(a), Url::parse(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

// Builds the seed address for a crawl from a bare domain
//
// "example.com" becomes "http://example.com". A domain that already carries
// an http:// or https:// prefix is canonicalized rather than prefixed twice.
pub fn seed_address(domain: &str) -> Result<Address, CrawlError> {
    let domain = domain.trim();

    let has_scheme = ["http://", "https://"].iter().any(|prefix| {
        domain
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    });

    let address = if has_scheme {
        canonicalize(domain)
    } else {
        format!("http://{}", domain)
    };

    if let Err(e) = Url::parse(&address) {
        return Err(CrawlError::InvalidAddress {
            address,
            reason: e.to_string(),
        });
    }

    if !is_well_formed(&address) {
        return Err(CrawlError::InvalidAddress {
            address,
            reason: "not an absolute http URL with a host".to_string(),
        });
    }

    Ok(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_secure_scheme() {
        assert_eq!(canonicalize("https://example.com/a"), "http://example.com/a");
        assert_eq!(canonicalize("HTTPS://example.com/a"), "http://example.com/a");
    }

    #[test]
    fn test_canonicalize_leaves_other_strings_alone() {
        assert_eq!(canonicalize("http://example.com/a"), "http://example.com/a");
        assert_eq!(canonicalize("/relative"), "/relative");
        assert_eq!(canonicalize("mailto:someone@example.com"), "mailto:someone@example.com");
        assert_eq!(canonicalize(""), "");
    }

    #[test]
    fn test_canonicalize_is_idempotent() {
        let once = canonicalize("https://example.com/x");
        assert_eq!(canonicalize(&once), once);
    }

    #[test]
    fn test_is_well_formed() {
        assert!(is_well_formed("http://example.com"));
        assert!(is_well_formed("https://example.com/path?q=1"));
        assert!(!is_well_formed("/relative"));
        assert!(!is_well_formed("mailto:someone@example.com"));
        assert!(!is_well_formed("http://"));
        assert!(!is_well_formed("not a url"));
    }

    #[test]
    fn test_same_page() {
        assert!(same_page("http://example.com", "http://example.com/"));
        assert!(same_page("http://EXAMPLE.com/", "http://example.com"));
        assert!(!same_page("http://example.com", "http://example.com/a"));
        assert!(same_page("/relative", "/relative"));
        assert!(!same_page("/relative", "http://example.com/relative"));
    }

    #[test]
    fn test_seed_address_prefixes_domain() {
        assert_eq!(seed_address("example.com").unwrap(), "http://example.com");
        assert_eq!(seed_address("  example.com/docs ").unwrap(), "http://example.com/docs");
    }

    #[test]
    fn test_seed_address_accepts_existing_scheme() {
        assert_eq!(seed_address("https://example.com").unwrap(), "http://example.com");
        assert_eq!(seed_address("http://example.com").unwrap(), "http://example.com");
    }

    #[test]
    fn test_seed_address_rejects_bad_domain() {
        let err = seed_address("not a domain").unwrap_err();
        assert!(matches!(err, CrawlError::InvalidAddress { .. }));

        let err = seed_address("").unwrap_err();
        assert!(matches!(err, CrawlError::InvalidAddress { .. }));
    }
}
