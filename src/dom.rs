//! DOM Operations Adapter
//!
//! Thin helpers over `dom_query` nodes. Extractors only ever look at a
//! single node, so everything here takes a `NodeRef` rather than a
//! `Selection`.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef};

pub use tendril::StrTendril;

/// Get tag name (lowercase). `None` for non-element nodes.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Get an attribute value by (case-insensitive) name.
///
/// Attributes are scanned in document order; a repeated key resolves to its
/// last occurrence.
#[must_use]
pub fn get_attribute(node: &NodeRef, name: &str) -> Option<String> {
    node.attrs()
        .iter()
        .rev()
        .find(|attr| attr.name.local.as_ref().eq_ignore_ascii_case(name))
        .map(|attr| attr.value.to_string())
}

/// Get all attributes as key-value pairs, in document order.
#[must_use]
pub fn get_all_attributes(node: &NodeRef) -> Vec<(String, String)> {
    node.attrs()
        .iter()
        .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
        .collect()
}

/// Get all text content of node and descendants.
#[inline]
#[must_use]
pub fn text_content(node: &NodeRef) -> StrTendril {
    node.text()
}
