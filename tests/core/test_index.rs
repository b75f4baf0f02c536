//! Tests for page index loading

use crate::common::DocsSite;
use vitepress_mcp::core::index::load_index;

#[test]
fn test_load_sample_index_preserves_order() {
    let site = DocsSite::small();
    let records = load_index(&site.index_path());

    let paths: Vec<&str> = records.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, vec!["a.md", "b.md"]);
    assert_eq!(records[0].title, "Intro");
    assert_eq!(records[1].content.as_deref(), Some("world peace"));
}

#[test]
fn test_load_nonexistent_is_empty() {
    let site = DocsSite::empty();
    assert!(load_index(&site.root().join("nope.json")).is_empty());
}

#[test]
fn test_load_unparsable_is_empty() {
    let site = DocsSite::with_files(&[("mcp-index.json", "[{\"path\": ")]);
    assert!(load_index(&site.index_path()).is_empty());
}

#[test]
fn test_load_non_array_is_empty() {
    let site = DocsSite::with_files(&[("mcp-index.json", "{\"pages\": []}")]);
    assert!(load_index(&site.index_path()).is_empty());

    let site = DocsSite::with_files(&[("mcp-index.json", "\"a.md\"")]);
    assert!(load_index(&site.index_path()).is_empty());
}

#[test]
fn test_load_filters_bad_records() {
    let site = DocsSite::with_files(&[(
        "mcp-index.json",
        r#"[
            {"path": "keep.md", "title": "Keep", "extra": true},
            {"path": "no-title.md"},
            {"title": "No path"},
            {"path": ["x"], "title": "Array path"},
            {"path": "keep2.md", "title": "Keep 2", "content": "body"}
        ]"#,
    )]);

    let records = load_index(&site.index_path());
    let paths: Vec<&str> = records.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, vec!["keep.md", "keep2.md"]);
}

#[test]
fn test_load_utf8_titles() {
    let site = DocsSite::with_files(&[(
        "mcp-index.json",
        r#"[{"path": "ja/guide.md", "title": "はじめに", "snippet": "インストール方法"}]"#,
    )]);

    let records = load_index(&site.index_path());
    assert_eq!(records[0].title, "はじめに");
}
