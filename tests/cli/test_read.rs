//! Tests for the read-doc-page CLI command

use crate::common::{create_test_services, DocsSite};
use vitepress_mcp::cli::commands::read::{execute, ReadArgs};
use vitepress_mcp::cli::OutputFormat;

fn args(path: &str) -> ReadArgs {
    ReadArgs {
        path: path.to_string(),
    }
}

#[tokio::test]
async fn test_read_page_human() {
    let site = DocsSite::small();
    let services = create_test_services(&site);

    let result = execute(args("guide/intro.md"), &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_read_page_json() {
    let site = DocsSite::small();
    let services = create_test_services(&site);

    let result = execute(args("guide/page.html"), &services, OutputFormat::Json).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_read_traversal_is_error() {
    let site = DocsSite::small();
    let services = create_test_services(&site);

    let err = execute(args("../../etc/passwd"), &services, OutputFormat::Human)
        .await
        .unwrap_err();
    assert!(err.to_string().starts_with("Invalid path"));
}

#[tokio::test]
async fn test_read_unsupported_type_is_error() {
    let site = DocsSite::small();
    let services = create_test_services(&site);

    let err = execute(args("notes.exe"), &services, OutputFormat::Human)
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unsupported file type: notes.exe (allowed: .md, .html, .htm, .txt)"
    );
}

#[tokio::test]
async fn test_read_directory_is_not_found() {
    let site = DocsSite::small();
    let services = create_test_services(&site);

    let err = execute(args("guide"), &services, OutputFormat::Human)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "File not found: guide");
}
