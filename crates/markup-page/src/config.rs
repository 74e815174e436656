//! Page configuration

use std::path::Path;

use markup_dom::SerializeOptions;
use serde::{Deserialize, Serialize};

use crate::page::PageError;

/// Output settings for a [`crate::Page`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Prefix documents rooted at `<html>` with the document-type line
    pub doctype: bool,
    /// Refuse to write a page that fails grammar validation
    pub require_valid: bool,
    /// Serializer settings
    pub serialize: SerializeOptions,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            doctype: true,
            require_valid: false,
            serialize: SerializeOptions::default(),
        }
    }
}

impl PageConfig {
    /// Load configuration from a JSON file; missing keys take defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PageError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json(&raw)?;
        tracing::debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Parse configuration from JSON text
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(json)?)
    }
}
