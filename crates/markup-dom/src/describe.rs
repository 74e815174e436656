//! Tree descriptions
//!
//! Builds content from a JSON value:
//! - string: text node
//! - array: sequence of nodes
//! - object `{ "tag", "attrs"?, "kind"?, "content"? }`: element
//!
//! Anything else is rejected with [`MarkupError::InvalidContentKind`].

use std::collections::BTreeMap;

use serde_json::Value;

use crate::element::{Element, PairingKind};
use crate::error::{MarkupError, Result};
use crate::node::{Content, Node, TextNode};

/// Build content from a JSON description
pub fn from_json(value: &Value) -> Result<Content> {
    match value {
        Value::Array(items) => {
            let nodes = items.iter().map(node_from_json).collect::<Result<Vec<_>>>()?;
            Ok(Content::Sequence(nodes))
        }
        other => node_from_json(other).map(Content::Single),
    }
}

/// Build a single element from a JSON description
pub fn element_from_json(value: &Value) -> Result<Element> {
    match node_from_json(value)? {
        Node::Element(element) => Ok(element),
        Node::Text(_) => Err(MarkupError::InvalidContentKind {
            path: String::new(),
            reason: "expected an element, found text".to_string(),
        }),
    }
}

/// Parse a JSON document and build its root element
pub fn element_from_str(json: &str) -> std::result::Result<Element, DescribeError> {
    let value: Value = serde_json::from_str(json)?;
    Ok(element_from_json(&value)?)
}

/// Error reading a description from text
#[derive(Debug, thiserror::Error)]
pub enum DescribeError {
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Markup(#[from] MarkupError),
}

fn node_from_json(value: &Value) -> Result<Node> {
    match value {
        Value::String(s) => Ok(Node::Text(TextNode::new(s.as_str()))),
        Value::Object(map) => {
            let tag = match map.get("tag") {
                Some(Value::String(tag)) => tag.as_str(),
                _ => return Err(invalid("", "element description needs a string 'tag'")),
            };

            let kind = match map.get("kind") {
                None => PairingKind::Paired,
                Some(Value::String(name)) => {
                    name.parse::<PairingKind>()
                        .map_err(|_| MarkupError::InvalidPairingKind {
                            path: tag.to_string(),
                            value: name.clone(),
                        })?
                }
                Some(other) => {
                    return Err(MarkupError::InvalidPairingKind {
                        path: tag.to_string(),
                        value: other.to_string(),
                    })
                }
            };

            let mut attributes = BTreeMap::new();
            if let Some(attrs) = map.get("attrs") {
                let Value::Object(attrs) = attrs else {
                    return Err(invalid(tag, "'attrs' must be an object"));
                };
                for (key, value) in attrs {
                    let Value::String(value) = value else {
                        return Err(invalid(tag, &format!("attribute '{key}' must be a string")));
                    };
                    attributes.insert(key.clone(), value.clone());
                }
            }

            let content = match map.get("content") {
                None | Some(Value::Null) => Content::Empty,
                Some(content) => from_json(content).map_err(|e| e.within(tag))?,
            };

            Ok(Node::Element(Element::new(tag, attributes, content, kind)?))
        }
        Value::Array(_) => Err(invalid("", "nested sequences are not content")),
        other => Err(invalid("", &format!("unsupported value {other}"))),
    }
}

fn invalid(path: &str, reason: &str) -> MarkupError {
    MarkupError::InvalidContentKind {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}
