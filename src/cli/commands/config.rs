//! Config command - show current configuration

use crate::cli::output::{self, colors, format_bytes};
use crate::cli::OutputFormat;
use crate::core::reader::{ALLOWED_EXTENSIONS, MAX_FILE_SIZE_BYTES};
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub index_path: String,
    pub docs_root: String,
    pub pages: usize,
    pub search: SearchSettings,
    pub read: ReadSettings,
}

#[derive(Debug, Serialize)]
pub struct SearchSettings {
    pub limit: usize,
}

#[derive(Debug, Serialize)]
pub struct ReadSettings {
    pub allowed_extensions: Vec<String>,
    pub max_file_size_bytes: u64,
}

/// Collect the effective configuration
pub fn build_response(services: &Services) -> ConfigResponse {
    ConfigResponse {
        index_path: services.index_path.display().to_string(),
        docs_root: services.root().display().to_string(),
        pages: services.index.len(),
        search: SearchSettings {
            limit: services.config.search.limit,
        },
        read: ReadSettings {
            allowed_extensions: ALLOWED_EXTENSIONS.iter().map(|e| format!(".{e}")).collect(),
            max_file_size_bytes: MAX_FILE_SIZE_BYTES,
        },
    }
}

/// Execute the config command
pub async fn execute(
    _args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = build_response(services);

    match format {
        OutputFormat::Human => {
            println!("{}", colors::label("Configuration:"));
            println!("  index_path: {}", colors::file_path(&response.index_path));
            println!("  docs_root: {}", colors::file_path(&response.docs_root));
            println!("  pages: {}", colors::number(&response.pages.to_string()));
            println!("  search:");
            println!("    limit: {}", response.search.limit);
            println!("  read:");
            println!(
                "    allowed_extensions: {}",
                response.read.allowed_extensions.join(", ")
            );
            println!(
                "    max_file_size: {}",
                format_bytes(response.read.max_file_size_bytes)
            );
        }
        OutputFormat::Json => {
            output::print_json(&response)?;
        }
    }

    Ok(())
}
