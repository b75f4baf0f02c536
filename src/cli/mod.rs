//! CLI adapter
//!
//! Provides command-line access to docs search and page reads.
//! This module is parallel to `mcp/` - both depend on `core/` but not on each other.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!          +------------+------------+
//!          |                         |
//!          v                         v
//! +------------------+      +------------------+
//! |      mcp/        |      |      cli/        |
//! | (stdio adapter)  |      | (clap adapter)   |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// vitepress-docs - search and read VitePress documentation
///
/// Works on the same mcp-index.json and docs root as the MCP server.
#[derive(Parser, Debug)]
#[command(name = "vitepress-docs")]
#[command(version)]
#[command(about = "Search and read VitePress documentation pages", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Path to mcp-index.json (overrides VITEPRESS_INDEX_PATH)
    #[arg(long, global = true)]
    pub index_path: Option<PathBuf>,

    /// Docs root directory (overrides VITEPRESS_DOCS_ROOT)
    #[arg(long, global = true)]
    pub docs_root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
///
/// Command names match MCP tool names (underscores become hyphens).
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Keyword search over the page index
    #[command(name = "search-docs")]
    SearchDocs(commands::SearchArgs),

    /// Print the raw content of one page
    #[command(name = "read-doc-page")]
    ReadDocPage(commands::ReadArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  vitepress-docs completions bash > ~/.local/share/bash-completion/completions/vitepress-docs
    ///   zsh:   vitepress-docs completions zsh > ~/.zfunc/_vitepress-docs
    ///   fish:  vitepress-docs completions fish > ~/.config/fish/completions/vitepress-docs.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    // Load configuration, then apply command-line overrides
    let mut config = Config::load()?;
    if let Some(path) = cli.index_path {
        config.index.path = Some(path);
    }
    if let Some(root) = cli.docs_root {
        config.docs.root = Some(root);
    }

    let cwd = std::env::current_dir()?;
    let services = Arc::new(Services::load(config, &cwd)?);
    if services.index.is_empty() {
        output::print_warning(&format!(
            "No pages loaded from {}",
            services.index_path.display()
        ));
    }

    match cli.command {
        Commands::SearchDocs(args) => commands::search::execute(args, &services, cli.format).await,
        Commands::ReadDocPage(args) => commands::read::execute(args, &services, cli.format).await,
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
