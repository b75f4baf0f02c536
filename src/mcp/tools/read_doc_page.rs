//! Read doc page tool handler

use super::handler::{error_content, text_content, McpToolHandler};
use crate::core::reader::MAX_FILE_SIZE_BYTES;
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct ReadDocPageHandler {
    services: Arc<Services>,
}

impl ReadDocPageHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for ReadDocPageHandler {
    fn name(&self) -> &str {
        "read_doc_page"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "read_doc_page".to_string(),
            description: format!(
                "Read the raw content of one documentation page (.md, .html, .htm, .txt; \
                 up to {MAX_FILE_SIZE_BYTES} bytes). The path is relative to the docs root, \
                 as returned by search_docs."
            ),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "path": {
                        "type": "string",
                        "description": "Page path relative to the docs root (e.g. guide/getting-started.md)"
                    }
                },
                "required": ["path"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize)]
        struct ReadArgs {
            path: String,
        }

        let args: ReadArgs =
            serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?;

        match self.services.read_page(&args.path) {
            Ok(content) => Ok(text_content(content)),
            Err(e) => {
                if e.is_rejection() {
                    tracing::debug!("read_doc_page {:?} rejected: {}", args.path, e);
                } else {
                    tracing::warn!("read_doc_page {:?} failed: {}", args.path, e);
                }
                Ok(error_content(e.to_string()))
            }
        }
    }
}
