//! MCP server implementation

use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::handlers::ProtocolHandlers;
use crate::mcp::protocol::*;
use crate::mcp::transport::StdioTransport;
use serde_json::Value;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, BufReader};
use tracing::{debug, error, info};

pub struct McpServer<W: AsyncWrite + Unpin = tokio::io::Stdout> {
    transport: StdioTransport<W>,
    handlers: Arc<ProtocolHandlers>,
}

impl McpServer<tokio::io::Stdout> {
    pub fn new(services: Arc<Services>) -> Self {
        Self::with_transport(services, StdioTransport::new())
    }

    /// Run the MCP server on stdin/stdout until EOF or Ctrl+C
    pub async fn run(&mut self) -> Result<(), McpError> {
        self.serve(BufReader::new(tokio::io::stdin())).await
    }
}

impl<W: AsyncWrite + Unpin> McpServer<W> {
    pub fn with_transport(services: Arc<Services>, transport: StdioTransport<W>) -> Self {
        Self {
            transport,
            handlers: Arc::new(ProtocolHandlers::new(services)),
        }
    }

    /// Serve requests read line by line from `input`
    ///
    /// Requests are handled one at a time, in arrival order.
    pub async fn serve<R: AsyncBufRead + Unpin>(&mut self, input: R) -> Result<(), McpError> {
        info!("Starting docs MCP server");

        let mut reader = input.lines();

        let mut shutdown = tokio::spawn(async {
            tokio::signal::ctrl_c().await.ok();
        });

        loop {
            tokio::select! {
                line = reader.next_line() => {
                    match line? {
                        Some(line) if !line.trim().is_empty() => {
                            self.process_and_respond(&line).await?;
                        }
                        None => break, // EOF
                        _ => continue,
                    }
                }

                _ = &mut shutdown => {
                    info!("Received shutdown signal");
                    break;
                }
            }
        }

        shutdown.abort();
        info!("MCP server shutting down");
        Ok(())
    }

    pub fn into_transport(self) -> StdioTransport<W> {
        self.transport
    }

    async fn process_and_respond(&mut self, line: &str) -> Result<(), McpError> {
        debug!("Received: {}", line);

        match self.process_message(line).await {
            Ok(response) => {
                self.transport.send_response(response).await?;
            }
            Err(e) => {
                error!("Error processing message: {}", e);
                let (code, message) = e.code_and_message();
                let error_response = self.handlers.create_error_response(None, code, message);
                self.transport.send_response(error_response).await?;
            }
        }

        Ok(())
    }

    async fn process_message(&self, line: &str) -> Result<JsonRpcResponse, McpError> {
        let value: Value =
            serde_json::from_str(line).map_err(|e| McpError::ParseError(e.to_string()))?;

        let request: JsonRpcRequest = match serde_json::from_value(value.clone()) {
            Ok(request) => request,
            Err(e) => {
                return Ok(self.handlers.create_error_response(
                    value.get("id").cloned(),
                    INVALID_REQUEST,
                    format!("Invalid request: {e}"),
                ));
            }
        };

        // Notifications never get a reply
        if request.id.is_none() {
            return match request.method.as_str() {
                "initialized" | "notifications/initialized" => {
                    self.handlers.handle_initialized(request).await
                }
                _ => {
                    debug!("Ignoring notification: {}", request.method);
                    Ok(empty_response())
                }
            };
        }

        match request.method.as_str() {
            "initialize" => self.handlers.handle_initialize(request).await,
            "tools/list" => self.handlers.handle_tools_list(request).await,
            "tools/call" => self.handlers.handle_tools_call(request).await,
            "ping" => self.handlers.handle_ping(request).await,
            _ => Ok(self.handlers.create_error_response(
                request.id,
                METHOD_NOT_FOUND,
                format!("Unknown method: {}", request.method),
            )),
        }
    }
}

fn empty_response() -> JsonRpcResponse {
    JsonRpcResponse {
        jsonrpc: "2.0".to_string(),
        id: None::<Value>,
        result: None,
        error: None,
    }
}
