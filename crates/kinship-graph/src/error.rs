//! Error types for graph construction

use thiserror::Error;

/// Result type alias for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors that can occur while loading a document or building a graph
#[derive(Error, Debug)]
pub enum GraphError {
    /// A relationship names a person that is not in the document
    #[error("Invalid reference in relationship {relationship}: '{reference}' does not name a known person")]
    InvalidReference {
        /// Relationship id, or its position when it has none
        relationship: String,
        /// The unresolved resource string
        reference: String,
    },

    /// Document JSON could not be parsed
    #[error("Document parse error: {0}")]
    Document(#[from] serde_json::Error),

    /// I/O error while reading a document or config file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
