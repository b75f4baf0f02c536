//! Read command - print the raw content of one page

use crate::cli::output;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the read command
#[derive(Args, Debug)]
pub struct ReadArgs {
    /// Page path relative to the docs root (e.g. guide/getting-started.md)
    pub path: String,
}

/// Read response
#[derive(Debug, Serialize)]
pub struct ReadResponse {
    pub path: String,
    pub bytes: usize,
    pub content: String,
}

/// Execute the read command
///
/// Rejected paths surface as command errors.
pub async fn execute(
    args: ReadArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = services.read_page(&args.path)?;

    match format {
        OutputFormat::Human => {
            print!("{content}");
            if !content.ends_with('\n') {
                println!();
            }
        }
        OutputFormat::Json => {
            let response = ReadResponse {
                path: args.path,
                bytes: content.len(),
                content,
            };
            output::print_json(&response)?;
        }
    }

    Ok(())
}
