//! Construction errors
//!
//! Raised synchronously while building or mutating a tree. Grammar failures
//! are not errors, see [`crate::Violation`].

/// Error raised when an element is built from malformed input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkupError {
    /// Content does not reduce to text, elements or a sequence of those
    #[error("Invalid content for <{path}>: {reason}")]
    InvalidContentKind { path: String, reason: String },

    /// Pairing kind is not one of the recognized names
    #[error("Invalid pairing kind '{value}' for <{path}>, expected 'paired' or 'void'")]
    InvalidPairingKind { path: String, value: String },
}

impl MarkupError {
    /// Prefix the offending path with an ancestor tag
    pub fn within(self, parent: &str) -> Self {
        match self {
            Self::InvalidContentKind { path, reason } => Self::InvalidContentKind {
                path: join_path(parent, &path),
                reason,
            },
            Self::InvalidPairingKind { path, value } => Self::InvalidPairingKind {
                path: join_path(parent, &path),
                value,
            },
        }
    }

    /// Tag path of the element that rejected its input
    pub fn path(&self) -> &str {
        match self {
            Self::InvalidContentKind { path, .. } | Self::InvalidPairingKind { path, .. } => path,
        }
    }
}

fn join_path(parent: &str, child: &str) -> String {
    if child.is_empty() {
        parent.to_string()
    } else {
        format!("{parent} > {child}")
    }
}

/// Result alias for tree construction
pub type Result<T> = std::result::Result<T, MarkupError>;
