//! Character encoding detection and transcoding.
//!
//! Open Graph values are read from attribute text, so a mis-decoded page
//! yields garbled titles and descriptions. The charset is taken from the
//! HTTP `Content-Type` header when one is known, else sniffed from the
//! document's own meta tags, else UTF-8.

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>/]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#).expect("valid regex")
});

/// Match the `charset` parameter of a `Content-Type` header value
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i);\s*charset\s*=\s*["']?([^"';\s]+)"#).expect("valid regex")
});

/// Detect character encoding from HTML bytes.
///
/// Looks at `<meta charset>` first, then `<meta http-equiv="Content-Type">`,
/// within the first 1024 bytes. Defaults to UTF-8. A declared UTF-16 is
/// read as UTF-8, since a page whose markup could be sniffed is not UTF-16.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    [
        capture(&CHARSET_META_RE, &head_str),
        capture(&CONTENT_TYPE_CHARSET_RE, &head_str),
    ]
    .into_iter()
    .flatten()
    .find_map(|label| Encoding::for_label(label.as_bytes()))
    .map_or(UTF_8, |encoding| {
        if encoding == UTF_16LE || encoding == UTF_16BE {
            UTF_8
        } else {
            encoding
        }
    })
}

/// Encoding named by a `Content-Type` header value, if any.
///
/// ```
/// use rs_opengraph::encoding::encoding_from_content_type;
///
/// let enc = encoding_from_content_type("text/html; charset=Shift_JIS");
/// assert_eq!(enc.map(|e| e.name()), Some("Shift_JIS"));
/// assert!(encoding_from_content_type("text/html").is_none());
/// ```
#[must_use]
pub fn encoding_from_content_type(content_type: &str) -> Option<&'static Encoding> {
    capture(&HEADER_CHARSET_RE, content_type)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
}

fn capture(re: &Regex, haystack: &str) -> Option<String> {
    re.captures(haystack)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Transcode HTML bytes to a UTF-8 string using the sniffed encoding.
///
/// Invalid sequences become U+FFFD rather than errors.
///
/// # Examples
///
/// ```
/// use rs_opengraph::encoding::transcode_to_utf8;
///
/// let html = b"<html><head><title>Hello</title></head></html>";
/// assert!(transcode_to_utf8(html).contains("Hello"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    decode_with(html, detect_encoding(html))
}

/// Transcode HTML bytes, preferring the encoding from a `Content-Type` header.
#[must_use]
pub fn transcode_with_content_type(html: &[u8], content_type: &str) -> String {
    let encoding = encoding_from_content_type(content_type).unwrap_or_else(|| detect_encoding(html));
    decode_with(html, encoding)
}

fn decode_with(html: &[u8], encoding: &'static Encoding) -> String {
    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _encoding_used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}
