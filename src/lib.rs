//! vitepress-mcp - VitePress docs over MCP
//!
//! Serves a documentation corpus built by a static-site generator to
//! MCP clients over stdio. Two tools are exposed: keyword search across
//! the prebuilt page index (`mcp-index.json`) and raw page reads by
//! relative path, confined to the docs root.
//!
//! # Architecture
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types
//!   - index (page index loading), root (index/root resolution)
//!   - guard (path containment), search (keyword scoring)
//!   - reader (typed, size-limited page reads)
//!   - services (immutable startup state)
//!
//! - **mcp**: MCP stdio adapter (depends on core)
//!   - server, handlers, transport, protocol, tools
//!
//! - **cli**: Command-line adapter (depends on core)

// Core domain logic (protocol-agnostic)
pub mod core;

// Command-line adapter
pub mod cli;

// MCP (Model Context Protocol) adapter
pub mod mcp;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{DocsError, Result};
pub use core::services::Services;
pub use core::types::PageRecord;
