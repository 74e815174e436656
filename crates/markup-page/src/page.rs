//! Page - a document tree ready for output

use std::fmt;
use std::path::Path;

use markup_dom::{Element, Grammar, MarkupError, Serializer, Tag, Violation};

use crate::config::PageConfig;

/// Document-type line written before an `<html>` root
pub const DOCTYPE: &str = "<!DOCTYPE html>";

/// Page output error
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Markup(#[from] MarkupError),

    #[error("Invalid document: {0}")]
    Invalid(#[from] Violation),
}

/// A document tree with output settings
#[derive(Debug, Clone)]
pub struct Page {
    root: Element,
    config: PageConfig,
    grammar: Grammar,
}

impl Page {
    /// Create a page with default settings
    pub fn new(root: Element) -> Self {
        Self::with_config(root, PageConfig::default())
    }

    pub fn with_config(root: Element, config: PageConfig) -> Self {
        Self {
            root,
            config,
            grammar: Grammar::standard(),
        }
    }

    /// Validate against a custom grammar instead of the standard one
    pub fn with_grammar(mut self, grammar: Grammar) -> Self {
        self.grammar = grammar;
        self
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Whether the tree is a valid document
    pub fn is_valid(&self) -> bool {
        self.grammar.is_valid(&self.root)
    }

    /// Validate the tree, reporting the first failure
    pub fn validate(&self) -> Result<(), Violation> {
        self.grammar.validate(&self.root)
    }

    /// Render the page, with the document-type line when the root is `<html>`
    pub fn render(&self) -> String {
        let body = Serializer::new(self.config.serialize.clone()).element(&self.root);
        if self.config.doctype && Tag::of(&self.root) == Some(Tag::Html) {
            format!("{DOCTYPE}\n{body}")
        } else {
            body
        }
    }

    /// Render and write the page to `path`
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), PageError> {
        let path = path.as_ref();
        if self.config.require_valid {
            self.validate()?;
        }
        let rendered = self.render();
        std::fs::write(path, &rendered)?;
        tracing::info!("Wrote {} bytes to {}", rendered.len(), path.display());
        Ok(())
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
