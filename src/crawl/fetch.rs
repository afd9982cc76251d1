// src/crawl/fetch.rs
// =============================================================================
// Page fetching.
//
// The crawl engine never talks to the network directly. It asks a
// PageFetcher for each page, which lets tests swap in an in-memory site.
//
// HttpFetcher is the real implementation:
// - One reqwest Client for the whole crawl (connection pooling)
// - Timeout and redirect limit come from CrawlConfig
// - Any HTTP status counts as a fetched page; deciding what a 404 or 500
//   means is the link extractor's job
// - Transport failures (timeout, DNS, TLS...) become a FetchError
//
// Rust concepts:
// - Traits: PageFetcher is the interface, HttpFetcher one implementation
// - async-trait: async fn inside a trait
// =============================================================================

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::CrawlConfig;
use crate::error::{FetchError, FetchErrorKind};
use crate::extract::PageResult;

/// Something that can fetch a page for the crawler
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, address: &str) -> Result<PageResult, FetchError>;
}

#[async_trait]
impl<T: PageFetcher + ?Sized> PageFetcher for &T {
    async fn fetch(&self, address: &str) -> Result<PageResult, FetchError> {
        (**self).fetch(address).await
    }
}

#[async_trait]
impl<T: PageFetcher + ?Sized> PageFetcher for Arc<T> {
    async fn fetch(&self, address: &str) -> Result<PageResult, FetchError> {
        (**self).fetch(address).await
    }
}

/// Fetches pages over HTTP with reqwest
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &CrawlConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, address: &str) -> Result<PageResult, FetchError> {
        let response = self
            .client
            .get(address)
            .send()
            .await
            .map_err(|e| categorize_error(address, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::new(address, FetchErrorKind::Body, e.to_string()))?;

        Ok(PageResult { status, body })
    }
}

// Sorts a reqwest error into a FetchErrorKind with a short message
fn categorize_error(address: &str, error: reqwest::Error) -> FetchError {
    let error_string = error.to_string().to_lowercase();

    let (kind, message) = if error.is_timeout() {
        (FetchErrorKind::Timeout, "Request timed out".to_string())
    } else if error.is_redirect() {
        (FetchErrorKind::Redirect, "Too many redirects".to_string())
    } else if error.is_connect() {
        if error_string.contains("dns") {
            (FetchErrorKind::Dns, "Could not resolve hostname".to_string())
        } else {
            (FetchErrorKind::Connect, "Connection failed".to_string())
        }
    } else if error_string.contains("certificate") || error_string.contains("ssl") || error_string.contains("tls") {
        (FetchErrorKind::Tls, "SSL certificate error".to_string())
    } else {
        (FetchErrorKind::Other, error.to_string())
    };

    FetchError::new(address, kind, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    #[async_trait]
    impl PageFetcher for Fixed {
        async fn fetch(&self, _address: &str) -> Result<PageResult, FetchError> {
            Ok(PageResult::ok("<a href=\"http://example.com/a\">A</a>"))
        }
    }

    #[test]
    fn test_http_fetcher_builds_from_default_config() {
        assert!(HttpFetcher::new(&CrawlConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn test_blanket_impls_delegate() {
        let fixed = Fixed;
        let by_ref = &fixed;
        let shared: Arc<dyn PageFetcher> = Arc::new(Fixed);

        assert!(by_ref.fetch("http://example.com").await.unwrap().status.is_success());
        assert!(shared.fetch("http://example.com").await.unwrap().status.is_success());
    }

    #[tokio::test]
    #[ignore = "needs a local network stack"]
    async fn test_unreachable_host_is_a_fetch_error() {
        // Port 9 on localhost (discard) is essentially never listening
        let fetcher = HttpFetcher::new(&CrawlConfig::default()).unwrap();
        let err = fetcher.fetch("http://127.0.0.1:9/").await.unwrap_err();
        assert_eq!(err.address, "http://127.0.0.1:9/");
        assert_ne!(err.kind, FetchErrorKind::Body);
    }
}
