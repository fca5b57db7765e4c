//! `<title>` extraction, the lenient-mode fallback for `og:title`.

use dom_query::NodeRef;

use super::{set_once, Contribute};
use crate::dom;
use crate::result::OpenGraph;

/// The text of a `<title>` tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Title {
    pub text: String,
}

/// Read the trimmed text content of a `<title>` node.
#[must_use]
pub fn title_tag(node: &NodeRef) -> Title {
    Title {
        text: dom::text_content(node).trim().to_string(),
    }
}

impl Contribute for Title {
    fn contribute(&self, og: &mut OpenGraph) {
        set_once(&mut og.title, &self.text);
    }
}
