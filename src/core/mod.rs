//! Core domain logic (protocol-agnostic)
//!
//! This module contains all logic that is independent of the
//! transport (MCP stdio, CLI).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Page records
//! - **index**: Page index loading
//! - **root**: Index location and docs root resolution
//! - **guard**: Path containment under the docs root
//! - **search**: Keyword scoring and ranking
//! - **reader**: Page reads with type and size limits
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod guard;
pub mod index;
pub mod reader;
pub mod root;
pub mod search;
pub mod services;
pub mod types;

// Re-export key types for convenience
pub use config::Config;
pub use error::{DocsError, Result};
pub use services::Services;
pub use types::PageRecord;
