// src/crawl/normalize.rs
// =============================================================================
// URL normalization for the crawler.
//
// Three small operations:
// - resolve: join a (possibly relative) href against the page it was found on
// - strip_fragment: drop any "#..." suffix so "page#a" and "page#b" are the
//   same page
// - in_scope: decide whether a URL may be followed at all
//
// Anything the `url` crate cannot parse is simply out of scope. Bad hrefs are
// common on real sites and never stop a crawl.
// =============================================================================

use url::Url;

// Resolves a possibly-relative href to an absolute URL
//
// Parameters:
//   base_url: the URL of the page the href was found on
//   href: the raw href attribute value
//
// Returns: Some(absolute_url) or None if either side can't be parsed
//
// Examples:
//   base = "http://example.com/a/b.html"
//   href = "c.html"            -> "http://example.com/a/c.html"
//   href = "/c.html"           -> "http://example.com/c.html"
//   href = "//other.com/x"     -> "http://other.com/x"
//   href = "#top"              -> "http://example.com/a/b.html#top"
pub fn resolve(base_url: &str, href: &str) -> Option<String> {
    let base = Url::parse(base_url).ok()?;
    base.join(href.trim()).ok().map(|url| url.to_string())
}

// Removes the fragment ("#...") from a URL
//
// Works on the raw string so it is safe to call on anything, parsed or not.
pub fn strip_fragment(url: &str) -> String {
    match url.find('#') {
        Some(idx) => url[..idx].to_string(),
        None => url.to_string(),
    }
}

// Returns true if the crawler is allowed to follow this URL
//
// A URL is in scope when:
// 1. It parses and uses http or https
// 2. Its host is the limiting domain or a subdomain of it
// 3. Its path looks like a document (no extension, or .html/.htm)
pub fn in_scope(url: &str, limiting_domain: &str) -> bool {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(_) => return false,
    };

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return false;
    }

    let host = match parsed.host_str() {
        Some(host) if !host.is_empty() => host.to_ascii_lowercase(),
        _ => return false,
    };

    let domain = limiting_domain.to_ascii_lowercase();
    let on_domain = host == domain || host.ends_with(&format!(".{}", domain));
    if !on_domain {
        return false;
    }

    is_document_path(parsed.path())
}

// Checks the extension of the last path segment
//
// Only the text after the final '/' counts, so a directory URL such as
// "/new.catalog.edu/" has no extension. Leading dots ("/.htaccess") are part
// of the name, not an extension.
fn is_document_path(path: &str) -> bool {
    let file_name = path.rsplit('/').next().unwrap_or("");
    let stem = file_name.trim_start_matches('.');
    match stem.rfind('.') {
        None => true,
        Some(idx) => {
            let ext = &stem[idx + 1..];
            ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm")
        }
    }
}
