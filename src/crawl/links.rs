// src/crawl/links.rs
// =============================================================================
// Link discovery: turns a parsed page into the list of new, followable URLs.
//
// How it works:
// 1. Select every <a> tag that has an href
// 2. Resolve the href against the page URL and drop its fragment
// 3. Keep it only if it is in scope and we have not seen it before
//
// "Seen before" means either already in the caller's LinkSet or already
// collected earlier on this same page.
// =============================================================================

use scraper::{Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;

use super::normalize::{in_scope, resolve, strip_fragment};

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("anchor selector is valid"));

/// Insertion-ordered set of unique URLs.
///
/// Uniqueness is exact string equality, so URLs must be normalized before
/// they are inserted.
#[derive(Debug, Default, Clone)]
pub struct LinkSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl LinkSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.seen.contains(url)
    }

    /// Appends `url` unless it is already present. Returns true if it was added.
    pub fn insert(&mut self, url: String) -> bool {
        if self.seen.contains(&url) {
            return false;
        }
        self.seen.insert(url.clone());
        self.order.push(url);
        true
    }

    pub fn extend<I: IntoIterator<Item = String>>(&mut self, urls: I) {
        for url in urls {
            self.insert(url);
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.order
    }
}

// Finds the links on a page that the crawler has not seen yet
//
// Parameters:
//   base_url: URL of the page (for resolving relative hrefs)
//   document: the parsed page
//   known: links discovered so far (not modified)
//   limiting_domain: host the crawl is restricted to
//
// Returns: new absolute, fragment-free URLs in the order they appear on the page
pub fn discover(
    base_url: &str,
    document: &Html,
    known: &LinkSet,
    limiting_domain: &str,
) -> Vec<String> {
    let mut found = LinkSet::new();

    for element in document.select(&ANCHOR_SELECTOR) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        let Some(absolute) = resolve(base_url, href) else {
            continue;
        };
        let url = strip_fragment(&absolute);

        if in_scope(&url, limiting_domain) && !known.contains(&url) {
            found.insert(url);
        }
    }

    found.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOMAIN: &str = "example.com";
    const BASE: &str = "http://example.com/catalog/index.html";

    fn discover_in(html: &str, known: &LinkSet) -> Vec<String> {
        let document = Html::parse_document(html);
        discover(BASE, &document, known, DOMAIN)
    }

    #[test]
    fn test_discover_in_document_order() {
        let html = r#"
            <a href="b.html">B</a>
            <a href="/a.html">A</a>
            <a href="http://sub.example.com/c">C</a>
        "#;
        let links = discover_in(html, &LinkSet::new());
        assert_eq!(
            links,
            vec![
                "http://example.com/catalog/b.html",
                "http://example.com/a.html",
                "http://sub.example.com/c",
            ]
        );
    }

    #[test]
    fn test_skips_anchor_without_href() {
        let html = r#"<a name="top">Top</a><a href="x.html">X</a>"#;
        let links = discover_in(html, &LinkSet::new());
        assert_eq!(links, vec!["http://example.com/catalog/x.html"]);
    }

    #[test]
    fn test_fragments_collapse_to_one_link() {
        let html = r##"
            <a href="x.html#one">1</a>
            <a href="x.html#two">2</a>
            <a href="x.html">3</a>
        "##;
        let links = discover_in(html, &LinkSet::new());
        assert_eq!(links, vec!["http://example.com/catalog/x.html"]);
    }

    #[test]
    fn test_fragment_only_href_points_at_current_page() {
        let html = r##"<a href="#section">Jump</a>"##;
        let links = discover_in(html, &LinkSet::new());
        assert_eq!(links, vec![BASE]);
    }

    #[test]
    fn test_skips_known_links() {
        let mut known = LinkSet::new();
        known.insert("http://example.com/catalog/x.html".to_string());

        let html = r#"<a href="x.html">X</a><a href="y.html">Y</a>"#;
        let links = discover_in(html, &known);
        assert_eq!(links, vec!["http://example.com/catalog/y.html"]);
        // the caller's set is left alone
        assert_eq!(known.len(), 1);
    }

    #[test]
    fn test_skips_out_of_scope_links() {
        let html = r#"
            <a href="http://evil.com/x">Evil</a>
            <a href="mailto:me@example.com">Mail</a>
            <a href="report.pdf">PDF</a>
            <a href="javascript:void(0)">JS</a>
            <a href="http://[bad">Broken</a>
        "#;
        assert!(discover_in(html, &LinkSet::new()).is_empty());
    }

    #[test]
    fn test_link_set_keeps_first_insertion_order() {
        let mut set = LinkSet::new();
        assert!(set.insert("b".to_string()));
        assert!(set.insert("a".to_string()));
        assert!(!set.insert("b".to_string()));
        set.extend(vec!["c".to_string(), "a".to_string()]);
        assert_eq!(set.into_vec(), vec!["b", "a", "c"]);
    }
}
