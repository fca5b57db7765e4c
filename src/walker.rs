//! Document walk.
//!
//! Visits every node of a tree once, depth-first and pre-order, with
//! children in sibling order. Contribution is order-sensitive (qualifiers
//! follow their leading tag, the first scalar wins), so this order is part
//! of the contract.
//!
//! The traversal keeps an explicit stack instead of recursing, so deeply
//! nested hostile markup cannot exhaust the call stack.

use dom_query::{Document, NodeRef};

use crate::dom;
use crate::error::{Error, Result};
use crate::result::OpenGraph;
use crate::tags::{Contribute, Fragment, TagKind};

/// Finds the elements that carry metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Walker {
    strict: bool,
}

impl Walker {
    /// Create a walker. In strict mode only `<meta>` elements are dispatched.
    #[must_use]
    pub const fn new(strict: bool) -> Self {
        Self { strict }
    }

    /// Elements to dispatch under `root` (inclusive), in visit order.
    ///
    /// Non-element nodes are skipped but still descended into, as are the
    /// children of dispatched and ignored elements alike. An element whose
    /// tag name cannot be read yields `Error::Structure` and ends the
    /// iteration.
    #[must_use]
    pub fn dispatches<'a>(self, root: NodeRef<'a>) -> Dispatches<'a> {
        Dispatches {
            // The root's own siblings are outside the walk.
            stack: vec![(root, false)],
            strict: self.strict,
        }
    }

    /// Contribute every dispatched element under `root` into `og`.
    ///
    /// On error `og` may be partially populated.
    ///
    /// # Errors
    ///
    /// Returns `Error::Structure` if the tree contains an element without a
    /// readable tag name.
    pub fn walk(self, root: NodeRef, og: &mut OpenGraph) -> Result<()> {
        let mut dispatched = 0usize;

        for dispatch in self.dispatches(root) {
            let (kind, node) = dispatch?;
            Fragment::extract(kind, &node).contribute(og);
            dispatched += 1;
        }

        tracing::debug!(
            dispatched,
            strict = self.strict,
            images = og.image.len(),
            videos = og.video.len(),
            audios = og.audio.len(),
            "open graph walk complete"
        );
        Ok(())
    }
}

/// Iterator returned by [`Walker::dispatches`].
pub struct Dispatches<'a> {
    stack: Vec<(NodeRef<'a>, bool)>,
    strict: bool,
}

impl<'a> Iterator for Dispatches<'a> {
    type Item = Result<(TagKind, NodeRef<'a>)>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, follow_siblings)) = self.stack.pop() {
            // Sibling goes below the first child so the whole subtree is
            // visited before it.
            if follow_siblings {
                if let Some(sibling) = node.next_sibling() {
                    self.stack.push((sibling, true));
                }
            }
            if let Some(child) = node.first_child() {
                self.stack.push((child, true));
            }

            if !node.is_element() {
                continue;
            }

            let Some(name) = dom::tag_name(&node) else {
                self.stack.clear();
                return Some(Err(Error::Structure(
                    "element node without a tag name".to_string(),
                )));
            };

            match TagKind::from_tag_name(&name) {
                Some(kind) if kind.is_accepted(self.strict) => return Some(Ok((kind, node))),
                _ => {}
            }
        }
        None
    }
}

impl OpenGraph {
    /// Walk the tree under `root`, contributing every recognized tag.
    ///
    /// Strictness comes from `self.intent`. On error the record may be
    /// partially populated.
    ///
    /// # Errors
    ///
    /// Returns `Error::Structure` if the tree contains an element without a
    /// readable tag name.
    pub fn walk(&mut self, root: NodeRef) -> Result<()> {
        Walker::new(self.intent.strict).walk(root, self)
    }

    /// Walk a whole parsed document.
    ///
    /// # Errors
    ///
    /// See [`OpenGraph::walk`].
    pub fn parse_document(&mut self, doc: &Document) -> Result<()> {
        self.walk(doc.root())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(doc: &Document, strict: bool) -> Vec<TagKind> {
        Walker::new(strict)
            .dispatches(doc.root())
            .map(|d| d.map(|(kind, _)| kind))
            .collect::<Result<Vec<_>>>()
            .unwrap_or_else(|e| panic!("walk failed: {e}"))
    }

    #[test]
    fn test_dispatch_order_is_preorder() {
        let doc = Document::from(
            r#"<html><head>
                <title>T</title>
                <meta property="og:title" content="A">
                <link rel="icon" href="/f.ico">
            </head><body>
                <div><meta property="og:image" content="x.png"></div>
                <link rel="canonical" href="https://a">
            </body></html>"#,
        );

        assert_eq!(
            names(&doc, false),
            vec![
                TagKind::Title,
                TagKind::Meta,
                TagKind::Link,
                TagKind::Meta,
                TagKind::Link,
            ]
        );
    }

    #[test]
    fn test_strict_dispatches_only_meta() {
        let doc = Document::from(
            r#"<html><head><title>T</title><link rel="icon" href="/f.ico">
            <meta property="og:type" content="website"></head></html>"#,
        );

        assert_eq!(names(&doc, true), vec![TagKind::Meta]);
    }

    #[test]
    fn test_subtree_root_excludes_siblings() {
        let doc = Document::from(
            r#"<html><body>
                <section id="a"><meta property="og:title" content="in"></section>
                <section id="b"><meta property="og:title" content="out"></section>
            </body></html>"#,
        );
        let section = doc
            .select("section#a")
            .nodes()
            .first()
            .cloned()
            .unwrap_or_else(|| panic!("section not parsed"));

        assert_eq!(Walker::default().dispatches(section.clone()).count(), 1);

        let mut og = OpenGraph::default();
        og.walk(section).unwrap_or_else(|e| panic!("walk failed: {e}"));

        assert_eq!(og.title.as_deref(), Some("in"));
    }

    #[test]
    fn test_walk_uses_intent_strictness() {
        let doc = Document::from("<html><head><title>Page</title></head></html>");

        let mut lenient = OpenGraph::default();
        lenient.parse_document(&doc).unwrap_or_else(|e| panic!("walk failed: {e}"));
        assert_eq!(lenient.title.as_deref(), Some("Page"));

        let mut strict = OpenGraph::with_intent(crate::Intent::default().with_strict(true));
        strict.parse_document(&doc).unwrap_or_else(|e| panic!("walk failed: {e}"));
        assert!(strict.title.is_none());
    }

    #[test]
    fn test_walker_walk_fills_caller_record() {
        let doc = Document::from(
            r#"<html><head>
                <title>Page</title>
                <meta property="og:image" content="a.png">
                <meta property="og:image:width" content="100">
                <link rel="canonical" href="https://a">
            </head></html>"#,
        );

        let mut og = OpenGraph::default();
        Walker::new(false)
            .walk(doc.root(), &mut og)
            .unwrap_or_else(|e| panic!("walk failed: {e}"));

        assert_eq!(og.title.as_deref(), Some("Page"));
        assert_eq!(og.image.len(), 1);
        assert_eq!(og.image[0].width, Some(100));
        assert_eq!(og.canonical_url.as_deref(), Some("https://a"));

        let mut strict = OpenGraph::default();
        Walker::new(true)
            .walk(doc.root(), &mut strict)
            .unwrap_or_else(|e| panic!("walk failed: {e}"));
        assert!(strict.title.is_none());
        assert!(strict.canonical_url.is_none());
        assert_eq!(strict.image.len(), 1);
    }

    #[test]
    fn test_deep_nesting_does_not_recurse() {
        let depth = 1_000;
        let html = format!(
            "{}<meta property=\"og:title\" content=\"deep\">{}",
            "<div>".repeat(depth),
            "</div>".repeat(depth)
        );
        let doc = Document::from(html.as_str());

        let mut og = OpenGraph::default();
        og.parse_document(&doc).unwrap_or_else(|e| panic!("walk failed: {e}"));

        assert_eq!(og.title.as_deref(), Some("deep"));
    }
}
