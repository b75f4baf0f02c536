//! Tool handler trait and result helpers

use crate::mcp::error::McpError;
use crate::mcp::protocol::{ContentBlock, ToolResult, ToolSchema};
use async_trait::async_trait;
use serde_json::Value;

/// Trait for MCP tool implementations
///
/// Each tool (search_docs, read_doc_page) implements this trait to
/// provide its schema and execution logic.
#[async_trait]
pub trait McpToolHandler: Send + Sync {
    /// Tool name (e.g., "search_docs")
    fn name(&self) -> &str;

    /// Tool schema for tools/list
    fn schema(&self) -> ToolSchema;

    /// Execute tool with arguments
    ///
    /// Argument errors are returned as `Err`. Failures the client should
    /// read as tool output come back as `Ok` with `is_error` set.
    async fn execute(&self, args: Value) -> Result<ToolResult, McpError>;
}

/// Successful result carrying a single text block
pub fn text_content(text: String) -> ToolResult {
    ToolResult {
        content: vec![ContentBlock::Text { text }],
        is_error: None,
    }
}

/// Failed result carrying a single text block, flagged `isError`
pub fn error_content(text: String) -> ToolResult {
    ToolResult {
        content: vec![ContentBlock::Text { text }],
        is_error: Some(true),
    }
}
