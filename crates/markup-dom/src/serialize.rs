//! Serializer - deterministic, indented markup output
//!
//! Output format:
//! - void element: `<tag attrs />`
//! - paired, no children: `<tag attrs></tag>`
//! - paired with children: open tag, one child per line indented one level
//!   deeper, close tag
//!
//! Attributes are written in ascending key order. Text is escaped here and
//! nowhere else, then trimmed of leading and trailing whitespace.

use serde::{Deserialize, Serialize};

use crate::element::{Element, PairingKind};
use crate::node::Node;

/// Line break emitted for every newline in text content
const LINE_BREAK: &str = "<br />";

/// Escape text content for markup output
///
/// `&` is replaced first so the entities introduced afterwards are not
/// re-escaped. Newlines become a line-break tag on its own line.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' => {
                out.push('\n');
                out.push_str(LINE_BREAK);
                out.push('\n');
            }
            other => push_escaped(&mut out, other),
        }
    }
    out
}

/// Escape an attribute value (no newline conversion)
pub fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        push_escaped(&mut out, c);
    }
    out
}

#[inline]
fn push_escaped(out: &mut String, c: char) {
    match c {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        other => out.push(other),
    }
}

/// Serializer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializeOptions {
    /// Spaces per nesting level
    pub indent: usize,
    /// Escape attribute values like text (off by default for compatibility)
    pub escape_attributes: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            escape_attributes: false,
        }
    }
}

/// Renders trees to strings
#[derive(Debug, Clone, Default)]
pub struct Serializer {
    options: SerializeOptions,
}

impl Serializer {
    pub fn new(options: SerializeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SerializeOptions {
        &self.options
    }

    /// Render an element and its subtree
    pub fn element(&self, element: &Element) -> String {
        let mut out = String::new();
        self.write_element(&mut out, element, 0);
        out
    }

    /// Render any node
    pub fn node(&self, node: &Node) -> String {
        let mut out = String::new();
        self.write_node(&mut out, node, 0);
        out
    }

    fn write_node(&self, out: &mut String, node: &Node, depth: usize) {
        match node {
            Node::Text(text) => {
                let pad = self.pad(depth);
                let escaped = text.escaped();
                // outer whitespace is dropped, inner blank lines are kept
                for (i, line) in escaped.trim().split('\n').enumerate() {
                    if i > 0 {
                        out.push('\n');
                    }
                    out.push_str(&pad);
                    out.push_str(line);
                }
            }
            Node::Element(element) => self.write_element(out, element, depth),
        }
    }

    fn write_element(&self, out: &mut String, element: &Element, depth: usize) {
        let pad = self.pad(depth);
        out.push_str(&pad);
        out.push('<');
        out.push_str(element.tag());
        self.write_attributes(out, element);

        match element.pairing_kind() {
            PairingKind::Void => out.push_str(" />"),
            PairingKind::Paired if element.children().is_empty() => {
                out.push('>');
                self.write_close(out, element);
            }
            PairingKind::Paired => {
                out.push_str(">\n");
                for (i, child) in element.children().iter().enumerate() {
                    if i > 0 {
                        out.push('\n');
                    }
                    self.write_node(out, child, depth + 1);
                }
                out.push('\n');
                out.push_str(&pad);
                self.write_close(out, element);
            }
        }
    }

    fn write_attributes(&self, out: &mut String, element: &Element) {
        for (key, value) in element.attributes() {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            if self.options.escape_attributes {
                out.push_str(&escape_attribute(value));
            } else {
                out.push_str(value);
            }
            out.push('"');
        }
    }

    fn write_close(&self, out: &mut String, element: &Element) {
        out.push_str("</");
        out.push_str(element.tag());
        out.push('>');
    }

    fn pad(&self, depth: usize) -> String {
        " ".repeat(self.options.indent * depth)
    }
}
