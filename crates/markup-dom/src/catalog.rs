//! Tag catalog
//!
//! The closed set of element variants the grammar knows about. Each variant
//! only fixes a tag name and a pairing kind; construction goes through
//! [`Element::new`] unchanged.

use std::fmt;

use crate::element::{Element, PairingKind};
use crate::error::Result;
use crate::node::Content;

/// Catalog variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    Html,
    Head,
    Body,
    Title,
    Meta,
    Img,
    Table,
    Tr,
    Th,
    Td,
    Ul,
    Ol,
    Li,
    H1,
    H2,
    P,
    Div,
    Span,
    Hr,
    Br,
}

/// (variant, tag name, pairing kind)
const CATALOG: &[(Tag, &str, PairingKind)] = &[
    (Tag::Html, "html", PairingKind::Paired),
    (Tag::Head, "head", PairingKind::Paired),
    (Tag::Body, "body", PairingKind::Paired),
    (Tag::Title, "title", PairingKind::Paired),
    (Tag::Meta, "meta", PairingKind::Void),
    (Tag::Img, "img", PairingKind::Void),
    (Tag::Table, "table", PairingKind::Paired),
    (Tag::Tr, "tr", PairingKind::Paired),
    (Tag::Th, "th", PairingKind::Paired),
    (Tag::Td, "td", PairingKind::Paired),
    (Tag::Ul, "ul", PairingKind::Paired),
    (Tag::Ol, "ol", PairingKind::Paired),
    (Tag::Li, "li", PairingKind::Paired),
    (Tag::H1, "h1", PairingKind::Paired),
    (Tag::H2, "h2", PairingKind::Paired),
    (Tag::P, "p", PairingKind::Paired),
    (Tag::Div, "div", PairingKind::Paired),
    (Tag::Span, "span", PairingKind::Paired),
    (Tag::Hr, "hr", PairingKind::Void),
    (Tag::Br, "br", PairingKind::Void),
];

impl Tag {
    /// Every variant, in catalog order
    pub const ALL: [Tag; 20] = [
        Tag::Html,
        Tag::Head,
        Tag::Body,
        Tag::Title,
        Tag::Meta,
        Tag::Img,
        Tag::Table,
        Tag::Tr,
        Tag::Th,
        Tag::Td,
        Tag::Ul,
        Tag::Ol,
        Tag::Li,
        Tag::H1,
        Tag::H2,
        Tag::P,
        Tag::Div,
        Tag::Span,
        Tag::Hr,
        Tag::Br,
    ];

    fn entry(self) -> &'static (Tag, &'static str, PairingKind) {
        // CATALOG is declared in the same order as the enum
        &CATALOG[self as usize]
    }

    /// Tag name as written in markup
    pub fn name(self) -> &'static str {
        self.entry().1
    }

    pub fn pairing_kind(self) -> PairingKind {
        self.entry().2
    }

    /// Look up a variant by tag name
    pub fn from_name(name: &str) -> Option<Tag> {
        CATALOG.iter().find(|(_, n, _)| *n == name).map(|(tag, _, _)| *tag)
    }

    /// Variant of an element; both the name and the pairing kind must match
    pub fn of(element: &Element) -> Option<Tag> {
        Tag::from_name(element.tag()).filter(|tag| tag.pairing_kind() == element.pairing_kind())
    }

    /// Empty element of this variant
    pub fn element(self) -> Element {
        match self.pairing_kind() {
            PairingKind::Paired => Element::paired(self.name()),
            PairingKind::Void => Element::void(self.name()),
        }
    }

    /// Build an element of this variant with attributes and content
    pub fn build<I, K, V>(self, attributes: I, content: impl Into<Content>) -> Result<Element>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Element::new(self.name(), attributes, content, self.pairing_kind())
    }

    /// Build an element of this variant with content only
    pub fn with(self, content: impl Into<Content>) -> Result<Element> {
        self.element().with_content(content)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
