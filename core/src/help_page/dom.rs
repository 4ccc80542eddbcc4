#![deny(missing_docs)]

//! # HTML Document Access
//!
//! Parses HTML with `html5ever` and flattens the resulting tree into a
//! document-order arena. Every node knows its parent and where its subtree ends,
//! so "next element after X", "next sibling" and "descendants of X" are plain
//! index scans.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Index of a node inside an [`HtmlPage`].
pub type NodeId = usize;

#[derive(Debug)]
enum NodeKind {
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug)]
struct PageNode {
    kind: NodeKind,
    parent: Option<NodeId>,
    /// One past the last node of this subtree.
    end: NodeId,
}

/// A parsed HTML page in document order.
#[derive(Debug)]
pub struct HtmlPage {
    nodes: Vec<PageNode>,
}

impl HtmlPage {
    /// Parses an HTML document. Malformed markup is repaired, never rejected.
    pub fn parse(html: &str) -> Self {
        let dom = parse_document(RcDom::default(), Default::default()).one(html);
        let mut page = Self { nodes: Vec::new() };
        page.flatten(&dom.document, None);
        page
    }

    fn flatten(&mut self, handle: &Handle, parent: Option<NodeId>) {
        let kind = match &handle.data {
            NodeData::Document => {
                for child in handle.children.borrow().iter() {
                    self.flatten(child, parent);
                }
                return;
            }
            NodeData::Element { name, attrs, .. } => NodeKind::Element {
                tag: name.local.to_string(),
                attrs: attrs
                    .borrow()
                    .iter()
                    .map(|a| (a.name.local.to_string(), a.value.to_string()))
                    .collect(),
            },
            NodeData::Text { contents } => NodeKind::Text(contents.borrow().to_string()),
            _ => return,
        };

        let id = self.nodes.len();
        self.nodes.push(PageNode {
            kind,
            parent,
            end: id + 1,
        });
        for child in handle.children.borrow().iter() {
            self.flatten(child, Some(id));
        }
        self.nodes[id].end = self.nodes.len();
    }

    /// Tag name of an element node.
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match &self.nodes.get(id)?.kind {
            NodeKind::Element { tag, .. } => Some(tag),
            NodeKind::Text(_) => None,
        }
    }

    /// Whether `id` is an element with the given tag.
    pub fn is(&self, id: NodeId, tag: &str) -> bool {
        self.tag(id) == Some(tag)
    }

    /// Attribute value of an element node.
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        match &self.nodes.get(id)?.kind {
            NodeKind::Element { attrs, .. } => attrs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    /// Whether the element's `class` attribute lists `class`.
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.attr(id, "class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// All elements with the given tag, in document order.
    pub fn elements<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = NodeId> + 'a {
        (0..self.nodes.len()).filter(move |&id| self.is(id, tag))
    }

    /// Descendant nodes of `id` (elements and text), in document order.
    pub fn descendants(&self, id: NodeId) -> impl Iterator<Item = NodeId> {
        let end = self.nodes.get(id).map_or(id, |node| node.end);
        (id + 1)..end
    }

    /// Descendant elements of `id` with the given tag.
    pub fn descendant_elements<'a>(
        &'a self,
        id: NodeId,
        tag: &'a str,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.descendants(id).filter(move |&d| self.is(d, tag))
    }

    /// Direct element children of `id` with the given tag.
    pub fn child_elements<'a>(
        &'a self,
        id: NodeId,
        tag: &'a str,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.descendants(id)
            .filter(move |&d| self.nodes[d].parent == Some(id) && self.is(d, tag))
    }

    /// The next element sharing `id`'s parent, skipping text nodes.
    pub fn next_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.nodes.get(id)?.parent;
        let mut cursor = self.nodes[id].end;
        while let Some(node) = self.nodes.get(cursor) {
            if node.parent != parent {
                return None;
            }
            if matches!(node.kind, NodeKind::Element { .. }) {
                return Some(cursor);
            }
            cursor = node.end;
        }
        None
    }

    /// First element after `id` in document order (descendants included)
    /// that satisfies `pred`.
    pub fn find_next(&self, id: NodeId, pred: impl Fn(NodeId) -> bool) -> Option<NodeId> {
        ((id + 1)..self.nodes.len())
            .find(|&next| matches!(self.nodes[next].kind, NodeKind::Element { .. }) && pred(next))
    }

    /// Text of the subtree with each fragment trimmed and empty fragments dropped,
    /// concatenated without separators.
    pub fn stripped_text(&self, id: NodeId) -> String {
        self.text_fragments(id)
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .collect()
    }

    /// Text of the subtree verbatim, with only the outer whitespace trimmed.
    pub fn raw_text(&self, id: NodeId) -> String {
        self.text_fragments(id).collect::<String>().trim().to_string()
    }

    fn text_fragments(&self, id: NodeId) -> impl Iterator<Item = &str> {
        std::iter::once(id)
            .chain(self.descendants(id))
            .filter_map(move |n| match &self.nodes.get(n)?.kind {
                NodeKind::Text(text) => Some(text.as_str()),
                NodeKind::Element { .. } => None,
            })
    }
}
