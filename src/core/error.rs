//! Error types and error handling for the docs server.
//!
//! This module defines the error types used throughout the
//! application. Protocol-specific error handling (MCP error codes
//! and `isError` tool results) is handled in the adapter modules.

use thiserror::Error;

/// Result type alias for docs operations
pub type Result<T> = std::result::Result<T, DocsError>;

/// Main error type for the docs server
///
/// Display text of the page-read variants is what clients see when a
/// read is rejected.
#[derive(Error, Debug)]
pub enum DocsError {
    /// Path was rejected by the path guard (traversal, absolute, symlink escape)
    #[error("Invalid path: '..' segments and absolute paths are not allowed.")]
    InvalidPath(String),

    /// Path is admissible but is not an existing regular file
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Unsupported file type: {0} (allowed: .md, .html, .htm, .txt)")]
    UnsupportedType(String),

    #[error("File too large: {path} (limit: {limit} bytes)")]
    TooLarge { path: String, limit: u64 },

    /// No index file could be located at startup
    #[error("Index not found: {0}")]
    IndexNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl DocsError {
    /// Check if this is a per-request rejection from the page reader
    ///
    /// Rejections are expected client mistakes. Anything else from a
    /// read is an I/O failure on our side.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            DocsError::InvalidPath(_)
                | DocsError::NotFound(_)
                | DocsError::UnsupportedType(_)
                | DocsError::TooLarge { .. }
        )
    }
}
