//! URL helpers for resolving Open Graph values against the source URL.
//!
//! Pages routinely publish `og:image` or favicon hrefs as relative or
//! protocol-relative paths; these helpers turn them into absolute URLs.

use url::Url;

/// Schemes that are never resolved against a base.
const OPAQUE_PREFIXES: [&str; 4] = ["data:", "javascript:", "mailto:", "tel:"];

/// Check if a string is an absolute http(s) URL with a host.
///
/// # Returns
/// * `(is_absolute, parsed_url)`
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) if url.host().is_some() => (true, Some(url)),
        _ => (false, None),
    }
}

/// Parse a string into a `Url` if it is an absolute http(s) URL.
#[must_use]
pub fn parse_url(url_str: &str) -> Option<Url> {
    is_absolute_url(url_str).1
}

/// Resolve `url_str` against `base`.
///
/// Absolute URLs and opaque schemes (`data:`, `mailto:`, ...) come back
/// unchanged (trimmed). Values that cannot be joined are returned as-is.
#[must_use]
pub fn create_absolute_url(url_str: &str, base: &Url) -> String {
    let url_str = url_str.trim();

    if url_str.is_empty() {
        return String::new();
    }

    if OPAQUE_PREFIXES.iter().any(|p| url_str.starts_with(p)) || is_absolute_url(url_str).0 {
        return url_str.to_string();
    }

    base.join(url_str)
        .map_or_else(|_| url_str.to_string(), |resolved| resolved.to_string())
}
