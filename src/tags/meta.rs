//! `<meta property=... content=...>` extraction.
//!
//! Recognized keys follow <https://ogp.me>:
//! - scalars: `og:title`, `og:type`, `og:url`, `og:description`,
//!   `og:determiner`, `og:locale`, `og:site_name`
//! - list: `og:locale:alternate`
//! - media: `og:image`, `og:video`, `og:audio`, each optionally followed by
//!   `:url`, `:secure_url`, `:type` (plus `:width`, `:height` for image and
//!   video, and `:alt` for image)
//!
//! A media qualifier applies to the most recent entry of its kind. OGP
//! expects the leading property first; a qualifier with nothing to qualify
//! is dropped.

use dom_query::NodeRef;

use super::{set_once, Contribute};
use crate::dom;
use crate::result::{Audio, Image, OpenGraph, Video};

/// Any `<meta>` tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Meta {
    pub property: String,
    pub name: String,
    pub content: String,
}

/// Read `property`, `name` and `content` from a `<meta>` node.
#[must_use]
pub fn meta_tag(node: &NodeRef) -> Meta {
    let mut meta = Meta::default();
    for (key, value) in dom::get_all_attributes(node) {
        match key.to_ascii_lowercase().as_str() {
            "property" => meta.property = value,
            "name" => meta.name = value,
            "content" => meta.content = value,
            _ => {}
        }
    }
    meta
}

/// Which attribute of a media entry a key addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaField {
    /// The bare property (`og:image`): always starts a new entry.
    Leading,
    /// `:url`, an alias of the bare property. Starts a new entry unless the
    /// latest one already carries the same URL.
    Url,
    SecureUrl,
    Type,
    Width,
    Height,
    Alt,
}

/// A recognized Open Graph key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Title,
    Type,
    Url,
    Description,
    Determiner,
    Locale,
    LocaleAlternate,
    SiteName,
    Image(MediaField),
    Video(MediaField),
    Audio(MediaField),
}

impl Property {
    /// Classify an `og:*` key. Unknown keys yield `None`.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        let key = key.trim().to_ascii_lowercase();
        let rest = key.strip_prefix("og:")?;

        let scalar = match rest {
            "title" => Some(Self::Title),
            "type" => Some(Self::Type),
            "url" => Some(Self::Url),
            "description" => Some(Self::Description),
            "determiner" => Some(Self::Determiner),
            "locale" => Some(Self::Locale),
            "locale:alternate" => Some(Self::LocaleAlternate),
            "site_name" => Some(Self::SiteName),
            _ => None,
        };
        if scalar.is_some() {
            return scalar;
        }

        let (kind, field) = match rest.split_once(':') {
            Some((kind, suffix)) => (kind, media_field(suffix)?),
            None => (rest, MediaField::Leading),
        };

        match (kind, field) {
            ("image", field) => Some(Self::Image(field)),
            // Only images carry alt text; audio has no dimensions.
            ("video", MediaField::Alt)
            | ("audio", MediaField::Width | MediaField::Height | MediaField::Alt) => None,
            ("video", field) => Some(Self::Video(field)),
            ("audio", field) => Some(Self::Audio(field)),
            _ => None,
        }
    }
}

fn media_field(suffix: &str) -> Option<MediaField> {
    match suffix {
        "url" => Some(MediaField::Url),
        "secure_url" => Some(MediaField::SecureUrl),
        "type" => Some(MediaField::Type),
        "width" => Some(MediaField::Width),
        "height" => Some(MediaField::Height),
        "alt" => Some(MediaField::Alt),
        _ => None,
    }
}

impl Meta {
    /// The key this tag declares: `property`, else `name`.
    #[must_use]
    pub fn key(&self) -> &str {
        if self.property.trim().is_empty() {
            self.name.trim()
        } else {
            self.property.trim()
        }
    }

    /// Classify this tag under the given strictness.
    ///
    /// Strict mode only reads `property="og:*"`. Lenient mode also accepts
    /// `name="og:*"` and the plain `name="description"` fallback, trying
    /// `property` before `name`.
    #[must_use]
    pub fn classify(&self, strict: bool) -> Option<Property> {
        if strict {
            return Property::parse(&self.property);
        }

        [self.property.trim(), self.name.trim()]
            .into_iter()
            .filter(|key| !key.is_empty())
            .find_map(|key| {
                Property::parse(key).or_else(|| {
                    key.eq_ignore_ascii_case("description")
                        .then_some(Property::Description)
                })
            })
    }
}

impl Contribute for Meta {
    fn contribute(&self, og: &mut OpenGraph) {
        let content = self.content.trim();
        if content.is_empty() {
            return;
        }

        let Some(property) = self.classify(og.intent.strict) else {
            tracing::trace!(key = self.key(), "ignoring unrecognized meta key");
            return;
        };

        match property {
            Property::Title => set_once(&mut og.title, content),
            Property::Type => set_once(&mut og.og_type, content),
            Property::Url => set_once(&mut og.url, content),
            Property::Description => set_once(&mut og.description, content),
            Property::Determiner => set_once(&mut og.determiner, content),
            Property::Locale => set_once(&mut og.locale, content),
            Property::SiteName => set_once(&mut og.site_name, content),
            Property::LocaleAlternate => og.locale_alternate.push(content.to_string()),
            Property::Image(field) => contribute_media(&mut og.image, field, content),
            Property::Video(field) => contribute_media(&mut og.video, field, content),
            Property::Audio(field) => contribute_media(&mut og.audio, field, content),
        }
    }
}

/// A structured media entry that qualifiers can be applied to.
trait MediaEntry: Default {
    const KIND: &'static str;

    fn url(&self) -> &str;

    fn set_url(&mut self, url: &str);

    /// Apply a non-url qualifier. Fields the entry lacks are ignored.
    fn qualify(&mut self, field: MediaField, value: &str);
}

fn contribute_media<M: MediaEntry>(entries: &mut Vec<M>, field: MediaField, content: &str) {
    // `:url` folds into the latest entry only when it names the same media.
    let starts_entry = match field {
        MediaField::Leading => true,
        MediaField::Url => entries
            .last()
            .is_none_or(|last| !last.url().is_empty() && last.url() != content),
        _ => false,
    };
    if starts_entry {
        let mut entry = M::default();
        entry.set_url(content);
        entries.push(entry);
        return;
    }

    match entries.last_mut() {
        Some(last) if field == MediaField::Url => last.set_url(content),
        Some(last) => last.qualify(field, content),
        None => {
            tracing::trace!(kind = M::KIND, ?field, "dropping qualifier with no leading entry");
        }
    }
}

/// Parse a pixel dimension; anything but an unsigned integer is ignored.
fn dimension(value: &str) -> Option<u32> {
    value.parse().ok()
}

impl MediaEntry for Image {
    const KIND: &'static str = "image";

    fn url(&self) -> &str {
        &self.url
    }

    fn set_url(&mut self, url: &str) {
        self.url = url.to_string();
    }

    fn qualify(&mut self, field: MediaField, value: &str) {
        match field {
            MediaField::SecureUrl => self.secure_url = Some(value.to_string()),
            MediaField::Type => self.mime_type = Some(value.to_string()),
            MediaField::Width => self.width = dimension(value).or(self.width),
            MediaField::Height => self.height = dimension(value).or(self.height),
            MediaField::Alt => self.alt = Some(value.to_string()),
            MediaField::Leading | MediaField::Url => {}
        }
    }
}

impl MediaEntry for Video {
    const KIND: &'static str = "video";

    fn url(&self) -> &str {
        &self.url
    }

    fn set_url(&mut self, url: &str) {
        self.url = url.to_string();
    }

    fn qualify(&mut self, field: MediaField, value: &str) {
        match field {
            MediaField::SecureUrl => self.secure_url = Some(value.to_string()),
            MediaField::Type => self.mime_type = Some(value.to_string()),
            MediaField::Width => self.width = dimension(value).or(self.width),
            MediaField::Height => self.height = dimension(value).or(self.height),
            MediaField::Leading | MediaField::Url | MediaField::Alt => {}
        }
    }
}

impl MediaEntry for Audio {
    const KIND: &'static str = "audio";

    fn url(&self) -> &str {
        &self.url
    }

    fn set_url(&mut self, url: &str) {
        self.url = url.to_string();
    }

    fn qualify(&mut self, field: MediaField, value: &str) {
        match field {
            MediaField::SecureUrl => self.secure_url = Some(value.to_string()),
            MediaField::Type => self.mime_type = Some(value.to_string()),
            _ => {}
        }
    }
}
