//! Error types for the patterns demo page.

use std::io;

use crate::dom::NodeId;

/// Errors produced while mounting or driving the demo page.
#[derive(Debug, thiserror::Error)]
pub enum PatternsError {
    /// A required element is absent from the document at mount time.
    #[error("missing required element: {0}")]
    MissingElement(String),

    #[error("unknown node handle: {0}")]
    UnknownNode(NodeId),

    #[error("config error: {0}")]
    Config(String),

    /// The document backend rejected an operation.
    #[error("backend error: {0}")]
    Backend(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, PatternsError>;
