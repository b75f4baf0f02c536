//! MCP tool implementations
//!
//! This module contains the tool handlers that expose the docs index
//! and page reader to MCP clients.

pub mod handler;
pub mod read_doc_page;
pub mod registry;
pub mod search_docs;

pub use handler::{error_content, text_content, McpToolHandler};
pub use read_doc_page::ReadDocPageHandler;
pub use registry::ToolRegistry;
pub use search_docs::SearchDocsHandler;
