//! vitepress-docs - command-line access to the docs index
//!
//! Mirrors the MCP tools for scripting and manual checks.
//!
//! # Examples
//!
//! ```bash
//! # Search the index in the current directory
//! vitepress-docs search-docs "getting started"
//!
//! # Read a page
//! vitepress-docs --index-path dist/mcp-index.json read-doc-page guide/intro.md
//!
//! # Show effective configuration
//! vitepress-docs show-config --format json
//! ```

use clap::Parser;
use vitepress_mcp::cli::{run, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
