//! VitePress docs MCP (Model Context Protocol) Server
//!
//! A stdio-based MCP server that exposes documentation search and page
//! reads as tools for MCP clients.

use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use vitepress_mcp::core::config::Config;
use vitepress_mcp::core::services::Services;
use vitepress_mcp::mcp::McpServer;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr) // Critical: stderr not stdout
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "vitepress_mcp=info".into()),
        )
        .with_ansi(false) // No color codes
        .compact() // Concise format
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {e}");
        std::process::exit(1);
    });
    config.log_config();

    let cwd = std::env::current_dir().unwrap_or_else(|e| {
        eprintln!("Failed to read current directory: {e}");
        std::process::exit(1);
    });

    // Locate and load the index; without one there is nothing to serve
    let services = Services::load(config, &cwd).unwrap_or_else(|e| {
        eprintln!("vitepress-mcp: {e}");
        std::process::exit(1);
    });

    let mut server = McpServer::new(Arc::new(services));

    if let Err(e) = server.run().await {
        eprintln!("MCP server error: {e}");
        std::process::exit(1);
    }
}
