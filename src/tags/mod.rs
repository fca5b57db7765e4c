//! Tag extractors and the contribution protocol.
//!
//! Each recognized tag family has a pure extractor that reads one element
//! node into a small fragment, and a `Contribute` impl that merges that
//! fragment into the aggregate `OpenGraph`.

pub mod link;
pub mod meta;
pub mod title;

use dom_query::NodeRef;

use crate::result::OpenGraph;

pub use link::{link_tag, Link};
pub use meta::{meta_tag, MediaField, Meta, Property};
pub use title::{title_tag, Title};

// HTML tag names the walker dispatches on.
pub const HTML_META_TAG: &str = "meta";
pub const HTML_LINK_TAG: &str = "link";
pub const HTML_TITLE_TAG: &str = "title";

/// The closed set of tags that carry metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Meta,
    Title,
    Link,
}

impl TagKind {
    /// Classify a lowercase tag name. `None` for every other element.
    #[must_use]
    pub fn from_tag_name(name: &str) -> Option<Self> {
        match name {
            HTML_META_TAG => Some(Self::Meta),
            HTML_TITLE_TAG => Some(Self::Title),
            HTML_LINK_TAG => Some(Self::Link),
            _ => None,
        }
    }

    /// Whether this tag is extracted under the given strictness.
    ///
    /// `<meta>` is always honored; `<title>` and `<link>` are lenient-mode
    /// fallbacks.
    #[must_use]
    pub const fn is_accepted(self, strict: bool) -> bool {
        match self {
            Self::Meta => true,
            Self::Title | Self::Link => !strict,
        }
    }
}

/// Merge a fragment into the aggregate record.
///
/// Contribution never fails: absent, empty or malformed values are no-ops.
pub trait Contribute {
    fn contribute(&self, og: &mut OpenGraph);
}

/// A typed value read from a single element node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Meta(Meta),
    Title(Title),
    Link(Link),
}

impl Fragment {
    /// Run the extractor for `kind` on `node`.
    #[must_use]
    pub fn extract(kind: TagKind, node: &NodeRef) -> Self {
        match kind {
            TagKind::Meta => Self::Meta(meta_tag(node)),
            TagKind::Title => Self::Title(title_tag(node)),
            TagKind::Link => Self::Link(link_tag(node)),
        }
    }
}

impl Contribute for Fragment {
    fn contribute(&self, og: &mut OpenGraph) {
        match self {
            Self::Meta(meta) => meta.contribute(og),
            Self::Title(title) => title.contribute(og),
            Self::Link(link) => link.contribute(og),
        }
    }
}

/// First occurrence wins: only fill an empty slot, and only with a
/// non-empty value.
pub(crate) fn set_once(slot: &mut Option<String>, value: &str) {
    if slot.is_none() && !value.is_empty() {
        *slot = Some(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_name() {
        assert_eq!(TagKind::from_tag_name("meta"), Some(TagKind::Meta));
        assert_eq!(TagKind::from_tag_name("title"), Some(TagKind::Title));
        assert_eq!(TagKind::from_tag_name("link"), Some(TagKind::Link));
        assert_eq!(TagKind::from_tag_name("div"), None);
        assert_eq!(TagKind::from_tag_name("metadata"), None);
    }

    #[test]
    fn test_is_accepted() {
        assert!(TagKind::Meta.is_accepted(true));
        assert!(TagKind::Meta.is_accepted(false));
        assert!(!TagKind::Title.is_accepted(true));
        assert!(TagKind::Title.is_accepted(false));
        assert!(!TagKind::Link.is_accepted(true));
        assert!(TagKind::Link.is_accepted(false));
    }

    #[test]
    fn test_set_once() {
        let mut slot = None;
        set_once(&mut slot, "");
        assert_eq!(slot, None);
        set_once(&mut slot, "first");
        set_once(&mut slot, "second");
        assert_eq!(slot.as_deref(), Some("first"));
    }

    #[test]
    fn test_fragment_contribute_dispatches() {
        let mut og = OpenGraph::default();
        Fragment::Title(Title { text: "Page".to_string() }).contribute(&mut og);
        Fragment::Link(Link {
            rel: "icon".to_string(),
            href: "/f.ico".to_string(),
        })
        .contribute(&mut og);

        assert_eq!(og.title.as_deref(), Some("Page"));
        assert_eq!(og.favicon.as_deref(), Some("/f.ico"));
    }
}
