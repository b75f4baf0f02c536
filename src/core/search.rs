//! Keyword search over the page index
//!
//! Scoring is deliberately simple: a page scores one point per distinct
//! query term found as a substring of its lower-cased preview text and
//! title. There is no stemming, tokenization or fuzzy matching.

use crate::core::types::PageRecord;

/// Default number of results returned by a search
pub const DEFAULT_LIMIT: usize = 20;

/// Characters of preview text shown per result
pub const PREVIEW_CHARS: usize = 200;

/// Message shown when nothing matches
pub const NO_RESULTS_MESSAGE: &str = "No matching documents found.";

/// A page paired with its match score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredPage<'a> {
    pub record: &'a PageRecord,
    pub score: usize,
}

/// Split a query into distinct lower-cased terms, in first-seen order
pub fn query_terms(query: &str) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for term in query.trim().to_lowercase().split_whitespace() {
        if !terms.iter().any(|t| t == term) {
            terms.push(term.to_string());
        }
    }
    terms
}

/// Searchable text for a record: preview text and title, lower-cased
pub fn haystack(record: &PageRecord) -> String {
    format!("{} {}", record.preview_text(), record.title).to_lowercase()
}

/// Number of `terms` occurring in the record's haystack
pub fn score(record: &PageRecord, terms: &[String]) -> usize {
    let text = haystack(record);
    terms
        .iter()
        .filter(|term| text.contains(term.as_str()))
        .count()
}

/// Score every record against `query` and keep the matches
///
/// Results are ordered by descending score; equal scores keep index
/// order. An empty query yields no scored results.
pub fn rank<'a>(query: &str, index: &'a [PageRecord]) -> Vec<ScoredPage<'a>> {
    let terms = query_terms(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<ScoredPage<'a>> = index
        .iter()
        .map(|record| ScoredPage {
            record,
            score: score(record, &terms),
        })
        .filter(|page| page.score > 0)
        .collect();

    // sort_by is stable, so ties stay in index order
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// Search the index, returning at most `limit` records
///
/// A blank query returns the first `limit` records unscored.
pub fn search<'a>(query: &str, index: &'a [PageRecord], limit: usize) -> Vec<&'a PageRecord> {
    if query.trim().is_empty() {
        return index.iter().take(limit).collect();
    }

    rank(query, index)
        .into_iter()
        .take(limit)
        .map(|page| page.record)
        .collect()
}

/// First `max_chars` characters of `text`
///
/// Counts characters, not bytes, so multi-byte text never splits.
pub fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
