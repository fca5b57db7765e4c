//! Result types for Open Graph extraction.
//!
//! `OpenGraph` is the aggregate record assembled by a single walk. Field
//! names follow <https://ogp.me> and stay stable in serialized form.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::intent::Intent;
use crate::url_utils;

/// An `og:image` entry with its qualifying properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// `og:image` / `og:image:url`.
    pub url: String,

    /// `og:image:secure_url`.
    pub secure_url: Option<String>,

    /// `og:image:type` (MIME type).
    #[serde(rename = "type")]
    pub mime_type: Option<String>,

    /// `og:image:width` in pixels.
    pub width: Option<u32>,

    /// `og:image:height` in pixels.
    pub height: Option<u32>,

    /// `og:image:alt`.
    pub alt: Option<String>,
}

/// An `og:video` entry with its qualifying properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// `og:video` / `og:video:url`.
    pub url: String,

    /// `og:video:secure_url`.
    pub secure_url: Option<String>,

    /// `og:video:type` (MIME type).
    #[serde(rename = "type")]
    pub mime_type: Option<String>,

    /// `og:video:width` in pixels.
    pub width: Option<u32>,

    /// `og:video:height` in pixels.
    pub height: Option<u32>,
}

/// An `og:audio` entry with its qualifying properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audio {
    /// `og:audio` / `og:audio:url`.
    pub url: String,

    /// `og:audio:secure_url`.
    pub secure_url: Option<String>,

    /// `og:audio:type` (MIME type).
    #[serde(rename = "type")]
    pub mime_type: Option<String>,
}

/// Open Graph metadata of a web page, plus the unofficial favicon and
/// canonical URL taken from `<link>` tags.
///
/// Scalars are `None` until a tag provides them. One instance is built per
/// parse and is read-only once handed back to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenGraph {
    // Basic metadata (https://ogp.me/#metadata)
    /// `og:title`, or the `<title>` text in lenient mode.
    pub title: Option<String>,

    /// `og:type`.
    #[serde(rename = "type")]
    pub og_type: Option<String>,

    /// `og:image` entries in document order.
    pub image: Vec<Image>,

    /// `og:url`.
    pub url: Option<String>,

    // Optional metadata (https://ogp.me/#optional)
    /// `og:audio` entries in document order.
    pub audio: Vec<Audio>,

    /// `og:description`, or `<meta name="description">` in lenient mode.
    pub description: Option<String>,

    /// `og:determiner`. Not validated against the enumerated values.
    pub determiner: Option<String>,

    /// `og:locale`.
    pub locale: Option<String>,

    /// `og:locale:alternate` values in document order.
    pub locale_alternate: Vec<String>,

    /// `og:site_name`.
    pub site_name: Option<String>,

    /// `og:video` entries in document order.
    pub video: Vec<Video>,

    // Additional (unofficial)
    /// `<link rel="icon">` / `<link rel="shortcut icon">` href.
    pub favicon: Option<String>,

    /// `<link rel="canonical">` href.
    pub canonical_url: Option<String>,

    /// How this record was requested. Not part of the protocol.
    #[serde(skip)]
    pub intent: Intent,
}

impl OpenGraph {
    /// Create an empty record for a document fetched from `url`.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_intent(Intent::new(url))
    }

    /// Create an empty record carrying `intent`.
    #[must_use]
    pub fn with_intent(intent: Intent) -> Self {
        Self {
            intent,
            ..Self::default()
        }
    }

    /// Resolve relative URL fields against the intent's source URL.
    ///
    /// Touches `url`, `canonical_url`, `favicon` and every media `url` /
    /// `secure_url`. Does nothing when the source URL is missing or not an
    /// absolute http(s) URL.
    pub fn to_absolute_urls(&mut self) {
        let Some(base) = self.intent.url.as_deref().and_then(url_utils::parse_url) else {
            return;
        };

        for field in [&mut self.url, &mut self.canonical_url, &mut self.favicon] {
            resolve_opt(field, &base);
        }
        for image in &mut self.image {
            image.url = url_utils::create_absolute_url(&image.url, &base);
            resolve_opt(&mut image.secure_url, &base);
        }
        for video in &mut self.video {
            video.url = url_utils::create_absolute_url(&video.url, &base);
            resolve_opt(&mut video.secure_url, &base);
        }
        for audio in &mut self.audio {
            audio.url = url_utils::create_absolute_url(&audio.url, &base);
            resolve_opt(&mut audio.secure_url, &base);
        }
    }
}

fn resolve_opt(field: &mut Option<String>, base: &Url) {
    if let Some(value) = field.as_mut() {
        *value = url_utils::create_absolute_url(value, base);
    }
}
