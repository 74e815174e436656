//! Markup Page
//!
//! Wraps a document tree for output: document-type prefix, validation and
//! writing to a file.
//!
//! # Example
//! ```rust,ignore
//! use markup_dom::{Tag, TextNode};
//! use markup_page::Page;
//!
//! let root = Tag::Html.with(vec![
//!     Tag::Head.with(Tag::Title.with(TextNode::new("Hi"))?)?,
//!     Tag::Body.element(),
//! ])?;
//! let page = Page::new(root);
//! assert!(page.is_valid());
//! page.write_to_file("index.html")?;
//! ```

mod config;
mod page;
pub mod sample;

pub use config::PageConfig;
pub use page::{DOCTYPE, Page, PageError};

// Re-export the tree crate for callers that only depend on this one
pub use markup_dom as dom;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
