//! Tests for the search-docs CLI command

use crate::common::{create_test_services, DocsSite};
use vitepress_mcp::cli::commands::search::{build_response, execute, SearchArgs};
use vitepress_mcp::cli::OutputFormat;

fn args(query: &str, limit: Option<usize>) -> SearchArgs {
    SearchArgs {
        query: query.to_string(),
        limit,
    }
}

#[test]
fn test_search_ranks_results() {
    let site = DocsSite::small();
    let services = create_test_services(&site);

    let response = build_response(&args("hello world", None), &services);

    assert_eq!(response.total_results, 2);
    assert_eq!(response.results[0].rank, 1);
    assert_eq!(response.results[0].path, "a.md");
    assert_eq!(response.results[0].preview, "hello world");
    assert_eq!(response.results[1].path, "b.md");
}

#[test]
fn test_search_no_results() {
    let site = DocsSite::small();
    let services = create_test_services(&site);

    let response = build_response(&args("kubernetes", None), &services);

    assert_eq!(response.total_results, 0);
    assert!(response.results.is_empty());
}

#[test]
fn test_search_limit_override() {
    let site = DocsSite::small();
    let services = create_test_services(&site);

    let response = build_response(&args("world", Some(1)), &services);

    assert_eq!(response.total_results, 1);
    assert_eq!(response.results[0].path, "a.md");
}

#[test]
fn test_search_empty_query_lists_pages() {
    let site = DocsSite::small();
    let services = create_test_services(&site);

    let response = build_response(&args("", None), &services);

    assert_eq!(response.total_results, 2);
}

#[test]
fn test_search_preview_is_truncated() {
    let long = "x".repeat(500);
    let index = format!(r#"[{{"path": "long.md", "title": "Long", "snippet": "{long}"}}]"#);
    let site = DocsSite::with_files(&[("mcp-index.json", index.as_str())]);
    let services = create_test_services(&site);

    let response = build_response(&args("long", None), &services);

    assert_eq!(response.results[0].preview.chars().count(), 200);
}

#[tokio::test]
async fn test_search_execute_human() {
    let site = DocsSite::small();
    let services = create_test_services(&site);

    let result = execute(args("world", None), &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_search_execute_json() {
    let site = DocsSite::small();
    let services = create_test_services(&site);

    let result = execute(args("nothing here", None), &services, OutputFormat::Json).await;
    assert!(result.is_ok());
}
