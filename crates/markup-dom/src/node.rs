//! Tree nodes
//!
//! A tree is built bottom-up from owned values:
//! - [`TextNode`] is an immutable leaf holding raw text
//! - [`Element`] owns its ordered children
//! - [`Content`] is whatever shape a caller hands to an element

use std::fmt;

use crate::element::Element;
use crate::serialize::escape_text;

/// Leaf node holding raw, unescaped text
///
/// Escaping happens exactly once, when the tree is serialized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextNode {
    content: String,
}

impl TextNode {
    /// Create a text node from raw text
    pub fn new(content: impl Into<String>) -> Self {
        Self { content: content.into() }
    }

    /// Raw text as given at construction
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Whitespace-only (or empty) text; such nodes are never stored as children
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Markup-safe form of the text
    pub fn escaped(&self) -> String {
        escape_text(&self.content)
    }
}

impl From<&str> for TextNode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TextNode {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for TextNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.escaped())
    }
}

/// A child of an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(TextNode),
    Element(Element),
}

impl Node {
    /// Check if this is text
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Get the text node if this is text
    #[inline]
    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            Node::Text(t) => Some(t),
            Node::Element(_) => None,
        }
    }

    /// Get the element if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }

    pub(crate) fn is_blank_text(&self) -> bool {
        matches!(self, Node::Text(t) if t.is_blank())
    }
}

impl From<TextNode> for Node {
    fn from(text: TextNode) -> Self {
        Node::Text(text)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text(t) => fmt::Display::fmt(t, f),
            Node::Element(e) => fmt::Display::fmt(e, f),
        }
    }
}

/// Content accepted by element construction and `add_content`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    Empty,
    Single(Node),
    Sequence(Vec<Node>),
}

impl Content {
    /// Flatten into nodes, dropping blank text
    pub(crate) fn into_nodes(self) -> Vec<Node> {
        let nodes = match self {
            Content::Empty => Vec::new(),
            Content::Single(node) => vec![node],
            Content::Sequence(nodes) => nodes,
        };
        let before = nodes.len();
        let kept: Vec<Node> = nodes.into_iter().filter(|n| !n.is_blank_text()).collect();
        if kept.len() < before {
            tracing::trace!("Dropped {} blank text node(s)", before - kept.len());
        }
        kept
    }
}

impl From<Node> for Content {
    fn from(node: Node) -> Self {
        Content::Single(node)
    }
}

impl From<TextNode> for Content {
    fn from(text: TextNode) -> Self {
        Content::Single(Node::Text(text))
    }
}

impl From<Element> for Content {
    fn from(element: Element) -> Self {
        Content::Single(Node::Element(element))
    }
}

impl From<Vec<Node>> for Content {
    fn from(nodes: Vec<Node>) -> Self {
        Content::Sequence(nodes)
    }
}

impl From<Vec<Element>> for Content {
    fn from(elements: Vec<Element>) -> Self {
        Content::Sequence(elements.into_iter().map(Node::Element).collect())
    }
}

impl From<Vec<TextNode>> for Content {
    fn from(texts: Vec<TextNode>) -> Self {
        Content::Sequence(texts.into_iter().map(Node::Text).collect())
    }
}

impl<T: Into<Content>> From<Option<T>> for Content {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}
