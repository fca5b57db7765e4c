//! # rs-opengraph
//!
//! Extracts "The Open Graph Protocol" metadata (<https://ogp.me>) from HTML
//! documents: title, type, images, audio, video, locale and friends, plus
//! the favicon and canonical URL from `<link>` tags.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_opengraph::parse;
//!
//! let html = r#"<html><head>
//!     <meta property="og:title" content="My Article">
//!     <meta property="og:image" content="https://example.com/a.png">
//!     <meta property="og:image:width" content="1200">
//! </head></html>"#;
//!
//! let og = parse(html)?;
//! assert_eq!(og.title.as_deref(), Some("My Article"));
//! assert_eq!(og.image[0].width, Some(1200));
//! # Ok::<(), rs_opengraph::Error>(())
//! ```
//!
//! ## Precedence
//!
//! Tags are read in document order (depth-first, pre-order):
//!
//! - **Scalars** (`og:title`, `og:type`, ...): the first occurrence wins
//! - **Favicon / canonical URL**: the last `<link>` wins
//! - **Lists** (`og:image`, `og:locale:alternate`, ...): every occurrence is
//!   appended
//! - **Qualifiers** (`og:image:width`, ...): attach to the latest entry of
//!   their kind and are dropped when there is none
//!
//! In strict mode (`Intent::strict`) only `og:*` meta properties are read;
//! the `<title>`, `<link>` and `<meta name="description">` fallbacks are off.
//!
//! ## Fetching
//!
//! This crate does not do network I/O. Fetch the page with the HTTP client
//! of your choice and hand the body to [`parse_response`], which checks the
//! content type and decodes the charset.

mod error;
mod intent;
mod result;
mod walker;

/// DOM operations adapter over `dom_query` nodes.
pub mod dom;

/// Tag extractors and the contribution protocol.
pub mod tags;

/// URL utilities for resolving relative Open Graph values.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use intent::Intent;
pub use result::{Audio, Image, OpenGraph, Video};
pub use walker::{Dispatches, Walker};

use dom_query::Document;

/// Parses Open Graph metadata from an HTML string in lenient mode.
///
/// # Example
///
/// ```rust
/// use rs_opengraph::parse;
///
/// let og = parse("<html><head><title>Fallback</title></head></html>")?;
/// assert_eq!(og.title.as_deref(), Some("Fallback"));
/// # Ok::<(), rs_opengraph::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn parse(html: &str) -> Result<OpenGraph> {
    parse_with_intent(html, Intent::default())
}

/// Parses Open Graph metadata from an HTML string.
///
/// The returned record carries `intent`.
///
/// # Example
///
/// ```rust
/// use rs_opengraph::{parse_with_intent, Intent};
///
/// let html = "<html><head><title>Page</title></head></html>";
/// let og = parse_with_intent(html, Intent::default().with_strict(true))?;
/// assert!(og.title.is_none());
/// # Ok::<(), rs_opengraph::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn parse_with_intent(html: &str, intent: Intent) -> Result<OpenGraph> {
    let document = Document::from(html);
    let mut og = OpenGraph::with_intent(intent);
    og.parse_document(&document)?;
    Ok(og)
}

/// Parses Open Graph metadata from HTML bytes, detecting the charset from
/// the document's meta tags.
///
/// # Example
///
/// ```rust
/// use rs_opengraph::{parse_bytes, Intent};
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\">\
///     <meta property=\"og:title\" content=\"Caf\xE9\"></head></html>";
/// let og = parse_bytes(html, Intent::default())?;
/// assert_eq!(og.title.as_deref(), Some("Café"));
/// # Ok::<(), rs_opengraph::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn parse_bytes(html: &[u8], intent: Intent) -> Result<OpenGraph> {
    let html_str = encoding::transcode_to_utf8(html);
    parse_with_intent(&html_str, intent)
}

/// Parses the body of an already fetched HTTP response.
///
/// Requires `intent.url` to name the fetched document and the
/// `Content-Type` header to be `text/html`. A `charset` parameter on the
/// header takes priority over the document's own declaration.
///
/// # Errors
///
/// - `Error::NoUrl` if `intent` has no source URL
/// - `Error::UnsupportedContentType` if `content_type` is missing or not
///   `text/html`
/// - `Error::Structure` if the walk fails
///
/// # Example
///
/// ```rust
/// use rs_opengraph::{parse_response, Error, Intent};
///
/// let body = br#"<meta property="og:type" content="website">"#;
/// let intent = Intent::new("https://example.com/");
///
/// let og = parse_response(body, Some("text/html; charset=utf-8"), intent.clone())?;
/// assert_eq!(og.og_type.as_deref(), Some("website"));
///
/// let err = parse_response(body, Some("application/json"), intent);
/// assert!(matches!(err, Err(Error::UnsupportedContentType(_))));
/// # Ok::<(), rs_opengraph::Error>(())
/// ```
pub fn parse_response(body: &[u8], content_type: Option<&str>, intent: Intent) -> Result<OpenGraph> {
    intent.source_url()?;

    let content_type = content_type.unwrap_or_default();
    if !is_html_content_type(content_type) {
        return Err(Error::UnsupportedContentType(content_type.to_string()));
    }

    let html = encoding::transcode_with_content_type(body, content_type);
    parse_with_intent(&html, intent)
}

fn is_html_content_type(content_type: &str) -> bool {
    content_type
        .trim_start()
        .get(..9)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("text/html"))
}
