//! Search command - keyword search over the page index

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::search::{preview, NO_RESULTS_MESSAGE, PREVIEW_CHARS};
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search keywords (empty lists the first pages of the index)
    #[arg(default_value = "")]
    pub query: String,

    /// Maximum number of results, at least 1 (defaults to the configured limit)
    #[arg(
        long,
        short = 'k',
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub limit: Option<usize>,
}

/// Search result item
#[derive(Debug, Serialize)]
pub struct SearchResultItem {
    pub rank: usize,
    pub path: String,
    pub title: String,
    pub preview: String,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponseOutput {
    pub query: String,
    pub total_results: usize,
    pub results: Vec<SearchResultItem>,
}

/// Build the search response without printing it
pub fn build_response(args: &SearchArgs, services: &Services) -> SearchResponseOutput {
    let limit = args.limit.unwrap_or(services.config.search.limit);
    let results = services.search_with_limit(&args.query, limit);

    SearchResponseOutput {
        query: args.query.clone(),
        total_results: results.len(),
        results: results
            .iter()
            .enumerate()
            .map(|(i, record)| SearchResultItem {
                rank: i + 1,
                path: record.path.clone(),
                title: record.title.clone(),
                preview: preview(record.preview_text(), PREVIEW_CHARS).to_string(),
            })
            .collect(),
    }
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = build_response(&args, services);

    if !output::is_human(format) {
        output::print_json(&response)?;
        return Ok(());
    }

    if response.results.is_empty() {
        println!("{NO_RESULTS_MESSAGE}");
        return Ok(());
    }

    println!(
        "Found {} result(s):\n",
        colors::number(&response.total_results.to_string())
    );

    for result in &response.results {
        println!(
            "[{}] {} {}",
            colors::rank(&result.rank.to_string()),
            colors::title(&result.title),
            colors::file_path(&result.path)
        );
        if !result.preview.is_empty() {
            for line in result.preview.lines().take(3) {
                println!("    {}", colors::dim(line));
            }
        }
        println!();
    }

    Ok(())
}
