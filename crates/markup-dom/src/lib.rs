//! Markup DOM
//!
//! In-memory tree of markup elements and text, with:
//! - a deterministic, indented serializer
//! - a catalog of known element variants
//! - a structural grammar validator for whole documents
//!
//! Trees are built bottom-up and are read-only once built, so any number of
//! threads may serialize or validate the same tree at once.

mod catalog;
pub mod describe;
mod element;
mod error;
mod grammar;
mod node;
mod serialize;

pub use catalog::Tag;
pub use element::{Element, PairingKind};
pub use error::{MarkupError, Result};
pub use grammar::{
    ChildKind, Grammar, GrammarRule, Membership, Violation, ViolationKind, is_valid, validate,
};
pub use node::{Content, Node, TextNode};
pub use serialize::{SerializeOptions, Serializer, escape_attribute, escape_text};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
