//! `<link rel=... href=...>` extraction.

use dom_query::NodeRef;

use super::Contribute;
use crate::dom;
use crate::result::OpenGraph;

/// Any `<link>` tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

/// Read `rel` and `href` from a `<link>` node.
#[must_use]
pub fn link_tag(node: &NodeRef) -> Link {
    Link {
        rel: dom::get_attribute(node, "rel").unwrap_or_default(),
        href: dom::get_attribute(node, "href").unwrap_or_default(),
    }
}

impl Link {
    /// Whether this link names the page's favicon.
    #[must_use]
    pub fn is_favicon(&self) -> bool {
        let rel = self.rel.trim();
        rel.eq_ignore_ascii_case("shortcut icon") || rel.eq_ignore_ascii_case("icon")
    }

    /// Whether this link names the page's canonical URL.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.rel.trim().eq_ignore_ascii_case("canonical")
    }
}

impl Contribute for Link {
    // Last occurrence wins for both fields.
    fn contribute(&self, og: &mut OpenGraph) {
        let href = self.href.trim();
        if href.is_empty() {
            return;
        }

        if self.is_favicon() {
            og.favicon = Some(href.to_string());
        } else if self.is_canonical() {
            og.canonical_url = Some(href.to_string());
        }
    }
}
