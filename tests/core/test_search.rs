//! Tests for keyword search over the page index

use crate::common::sample_index_json;
use vitepress_mcp::core::index::parse_index;
use vitepress_mcp::core::search::{haystack, query_terms, rank, search};
use vitepress_mcp::core::types::PageRecord;

fn paths(records: &[&PageRecord]) -> Vec<String> {
    records.iter().map(|r| r.path.clone()).collect()
}

#[test]
fn test_single_term_tie_preserves_order() {
    let index = parse_index(sample_index_json());

    let ranked = rank("world", &index);
    let scores: Vec<(String, usize)> = ranked
        .iter()
        .map(|p| (p.record.path.clone(), p.score))
        .collect();

    assert_eq!(
        scores,
        vec![("a.md".to_string(), 1), ("b.md".to_string(), 1)]
    );
}

#[test]
fn test_two_terms_rank_by_score() {
    let index = parse_index(sample_index_json());

    let ranked = rank("hello world", &index);
    assert_eq!(ranked[0].record.path, "a.md");
    assert_eq!(ranked[0].score, 2);
    assert_eq!(ranked[1].record.path, "b.md");
    assert_eq!(ranked[1].score, 1);

    assert_eq!(paths(&search("hello world", &index, 20)), vec!["a.md", "b.md"]);
}

#[test]
fn test_whitespace_query_returns_index_prefix() {
    let index: Vec<PageRecord> = (0..25)
        .map(|i| PageRecord::new(format!("p{i}.md"), format!("Page {i}")))
        .collect();

    for query in ["", " ", "\t\n  "] {
        let results = search(query, &index, 20);
        let expected: Vec<String> = (0..20).map(|i| format!("p{i}.md")).collect();
        assert_eq!(paths(&results), expected);
    }
}

#[test]
fn test_results_match_and_are_sorted() {
    let index = vec![
        PageRecord::new("1.md", "Routing").with_snippet("file based routing"),
        PageRecord::new("2.md", "Theme").with_snippet("custom theme layout"),
        PageRecord::new("3.md", "Layout").with_content("routing and layout"),
        PageRecord::new("4.md", "Deploy").with_snippet("static hosting"),
        PageRecord::new("5.md", "Theme routing").with_snippet("layout slots"),
    ];
    let query = "routing layout theme";
    let terms = query_terms(query);

    let ranked = rank(query, &index);
    assert!(!ranked.is_empty());

    for page in &ranked {
        let text = haystack(page.record);
        assert!(terms.iter().any(|t| text.contains(t.as_str())));
    }
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }

    let order: Vec<&str> = ranked.iter().map(|p| p.record.path.as_str()).collect();
    assert_eq!(order, vec!["5.md", "2.md", "3.md", "1.md"]);
}

#[test]
fn test_limit_caps_results() {
    let index: Vec<PageRecord> = (0..50)
        .map(|i| PageRecord::new(format!("{i}.md"), "Guide"))
        .collect();
    assert_eq!(search("guide", &index, 20).len(), 20);
    assert_eq!(search("guide", &index, 3).len(), 3);
}

#[test]
fn test_unicode_query() {
    let index = vec![
        PageRecord::new("ja/a.md", "はじめに").with_snippet("インストール"),
        PageRecord::new("ja/b.md", "設定"),
    ];
    assert_eq!(paths(&search("インストール", &index, 20)), vec!["ja/a.md"]);
}
