//! Element - tagged node with attributes and ordered children

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{MarkupError, Result};
use crate::node::{Content, Node};
use crate::serialize::Serializer;

/// Whether an element wraps children or renders as a single unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PairingKind {
    /// `<tag></tag>`
    #[default]
    Paired,
    /// `<tag />`, never has children
    Void,
}

impl PairingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PairingKind::Paired => "paired",
            PairingKind::Void => "void",
        }
    }
}

impl FromStr for PairingKind {
    type Err = MarkupError;

    /// Accepts `paired`/`double` and `void`/`simple`
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "paired" | "double" => Ok(PairingKind::Paired),
            "void" | "simple" => Ok(PairingKind::Void),
            other => Err(MarkupError::InvalidPairingKind {
                path: String::new(),
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for PairingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Markup element
///
/// Invariants, held by every constructor and by [`Element::add_content`]:
/// - a void element has no children
/// - no child is a blank text node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: BTreeMap<String, String>,
    children: Vec<Node>,
    kind: PairingKind,
}

impl Element {
    /// Build an element, validating its content
    pub fn new<I, K, V>(
        tag: impl Into<String>,
        attributes: I,
        content: impl Into<Content>,
        kind: PairingKind,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut element = Self::empty(tag, kind);
        element.attributes = attributes
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        element.add_content(content)?;
        Ok(element)
    }

    /// Build an element whose pairing kind is given by name
    pub fn with_kind_name<I, K, V>(
        tag: impl Into<String>,
        attributes: I,
        content: impl Into<Content>,
        kind: &str,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let tag = tag.into();
        let kind = kind.parse::<PairingKind>().map_err(|e| match e {
            MarkupError::InvalidPairingKind { value, .. } => MarkupError::InvalidPairingKind {
                path: tag.clone(),
                value,
            },
            other => other,
        })?;
        Self::new(tag, attributes, content, kind)
    }

    /// Empty paired element
    pub fn paired(tag: impl Into<String>) -> Self {
        Self::empty(tag, PairingKind::Paired)
    }

    /// Void element
    pub fn void(tag: impl Into<String>) -> Self {
        Self::empty(tag, PairingKind::Void)
    }

    fn empty(tag: impl Into<String>, kind: PairingKind) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
            kind,
        }
    }

    /// Builder-style attribute setter
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(key, value);
        self
    }

    /// Builder-style `add_content`
    pub fn with_content(mut self, content: impl Into<Content>) -> Result<Self> {
        self.add_content(content)?;
        Ok(self)
    }

    /// Append content after the existing children
    ///
    /// Blank text nodes are dropped. A void element rejects anything that
    /// remains, leaving its state untouched.
    pub fn add_content(&mut self, content: impl Into<Content>) -> Result<()> {
        let nodes = content.into().into_nodes();
        if nodes.is_empty() {
            return Ok(());
        }
        if self.kind == PairingKind::Void {
            return Err(MarkupError::InvalidContentKind {
                path: self.tag.clone(),
                reason: format!("void element cannot hold {} child node(s)", nodes.len()),
            });
        }
        self.children.extend(nodes);
        Ok(())
    }

    /// Tag name
    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[inline]
    pub fn pairing_kind(&self) -> PairingKind {
        self.kind
    }

    #[inline]
    pub fn is_void(&self) -> bool {
        self.kind == PairingKind::Void
    }

    /// Attributes in ascending key order
    #[inline]
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// Get an attribute value
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Set an attribute, replacing any previous value
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Children in insertion order
    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Element children only
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }
}

impl Default for Element {
    fn default() -> Self {
        Self::paired("div")
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Serializer::default().element(self))
    }
}
