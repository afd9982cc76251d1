// src/extract/html.rs
// =============================================================================
// This module reads link targets out of HTML.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Nothing is resolved or validated here. We hand back exactly what each
// anchor's href attribute says, or None when the anchor has no href.
// =============================================================================

use scraper::{Html, Selector};

// Returns the href of every <a> element, in document order
//
// Example:
//   html   = "<a href='/docs'>Docs</a><a name='top'></a>"
//   result = [Some("/docs"), None]
pub fn anchor_targets(html: &str) -> Vec<Option<String>> {
    let document = Html::parse_document(html);

    // "a" (not "a[href]") so anchors without a target show up as None
    let selector = match Selector::parse("a") {
        Ok(selector) => selector,
        Err(e) => {
            tracing::error!(error = %e, "Anchor selector failed to parse");
            return Vec::new();
        }
    };

    document
        .select(&selector)
        .map(|element| element.value().attr("href").map(str::to_string))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_anchor() {
        let html = r#"<a href="https://www.rust-lang.org">Rust</a>"#;
        assert_eq!(anchor_targets(html), vec![Some("https://www.rust-lang.org".to_string())]);
    }

    #[test]
    fn test_anchor_without_href() {
        let html = r#"<a name="top">Top</a><a href="/docs">Docs</a>"#;
        assert_eq!(anchor_targets(html), vec![None, Some("/docs".to_string())]);
    }

    #[test]
    fn test_relative_links_are_not_resolved() {
        let html = r#"<a href="../about">About</a>"#;
        assert_eq!(anchor_targets(html), vec![Some("../about".to_string())]);
    }

    #[test]
    fn test_ignores_non_anchor_elements() {
        let html = r#"
            <link href="/style.css" rel="stylesheet">
            <img src="/logo.png">
            <a href="/docs">Docs</a>
        "#;
        assert_eq!(anchor_targets(html), vec![Some("/docs".to_string())]);
    }

    #[test]
    fn test_empty_document() {
        assert!(anchor_targets("").is_empty());
    }
}
