//! Search docs tool handler

use super::handler::{text_content, McpToolHandler};
use crate::core::search::{preview, NO_RESULTS_MESSAGE, PREVIEW_CHARS};
use crate::core::services::Services;
use crate::core::types::PageRecord;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct SearchDocsHandler {
    services: Arc<Services>,
}

impl SearchDocsHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

/// Render search results as a plain-text listing
pub fn format_results(results: &[&PageRecord]) -> String {
    if results.is_empty() {
        return NO_RESULTS_MESSAGE.to_string();
    }

    let entries: Vec<String> = results
        .iter()
        .map(|record| {
            format!(
                "- {}\n  path: {}\n  {}...",
                record.title,
                record.path,
                preview(record.preview_text(), PREVIEW_CHARS)
            )
        })
        .collect();

    format!(
        "Search results ({}):\n\n{}",
        results.len(),
        entries.join("\n\n")
    )
}

#[async_trait]
impl McpToolHandler for SearchDocsHandler {
    fn name(&self) -> &str {
        "search_docs"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "search_docs".to_string(),
            description: "Keyword search over the VitePress documentation index. \
                         Returns matching pages with title, path and a short preview. \
                         Pages are ranked by how many query words appear in their title \
                         and preview (case-insensitive substring match). \
                         An empty query lists the first pages of the index."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search keywords, separated by spaces"
                    }
                },
                "required": ["query"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        #[derive(Deserialize)]
        struct SearchArgs {
            query: String,
        }

        let args: SearchArgs =
            serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?;

        let results = self.services.search(&args.query);
        tracing::debug!("search_docs {:?}: {} result(s)", args.query, results.len());

        Ok(text_content(format_results(&results)))
    }
}
