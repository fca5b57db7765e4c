//! Configuration for a parse operation.
//!
//! An `Intent` describes where a document came from and how tolerant the
//! walk should be. It travels with the `OpenGraph` it produced but has no
//! meaning for the Open Graph protocol itself.

use crate::error::{Error, Result};

/// How to parse and complete an `OpenGraph` record.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_opengraph::Intent;
///
/// let intent = Intent {
///     strict: true,
///     ..Intent::default()
/// };
/// assert!(intent.url.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Intent {
    /// Source URL of the document.
    ///
    /// Carried alongside the record for context. The walk never reads it;
    /// `OpenGraph::to_absolute_urls` resolves relative values against it.
    ///
    /// Default: `None`
    pub url: Option<String>,

    /// Only honor canonical `og:*` meta tags.
    ///
    /// When enabled, `<title>`, `<link>` and `<meta name="description">`
    /// fallbacks are ignored.
    ///
    /// Default: `false`
    pub strict: bool,
}

impl Intent {
    /// Create an intent for a document fetched from `url`.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            strict: false,
        }
    }

    /// Set strict mode.
    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// The source URL, or `Error::NoUrl` when it is missing or blank.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoUrl` if no non-empty URL has been set.
    pub fn source_url(&self) -> Result<&str> {
        match self.url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err(Error::NoUrl),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_lenient_without_url() {
        let intent = Intent::default();
        assert!(!intent.strict);
        assert!(intent.url.is_none());
    }

    #[test]
    fn source_url_rejects_missing_and_blank() {
        assert!(matches!(Intent::default().source_url(), Err(Error::NoUrl)));
        assert!(matches!(Intent::new("   ").source_url(), Err(Error::NoUrl)));
    }

    #[test]
    fn source_url_returns_trimmed_value() {
        let intent = Intent::new(" https://example.com/a ").with_strict(true);
        assert_eq!(intent.source_url().ok(), Some("https://example.com/a"));
        assert!(intent.strict);
    }
}
