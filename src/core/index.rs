//! Page index loading
//!
//! The index is a JSON array of `{path, title, snippet?, content?}`
//! objects written by the site build. Loading never fails: a missing,
//! unreadable or malformed index yields an empty sequence so the
//! server can still start and answer requests.

use crate::core::types::PageRecord;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Load the page index from `path`
///
/// Records without string `path` and `title` fields are dropped.
/// Order is preserved and duplicates are kept.
pub fn load_index(path: &Path) -> Vec<PageRecord> {
    if !path.is_file() {
        tracing::warn!("Index file not found: {}", path.display());
        return Vec::new();
    }

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!("Failed to read index {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    parse_index(&raw)
}

/// Parse index JSON text into page records
pub fn parse_index(raw: &str) -> Vec<PageRecord> {
    let entries = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(entries)) => entries,
        Ok(_) => {
            tracing::warn!("Index is not a JSON array, using empty index");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!("Failed to parse index: {}", e);
            return Vec::new();
        }
    };

    let total = entries.len();
    let records: Vec<PageRecord> = entries
        .iter()
        .filter_map(|entry| entry.as_object().and_then(record_from_object))
        .collect();

    if records.len() < total {
        tracing::debug!("Dropped {} malformed index entries", total - records.len());
    }

    records
}

fn record_from_object(obj: &Map<String, Value>) -> Option<PageRecord> {
    let path = obj.get("path")?.as_str()?;
    let title = obj.get("title")?.as_str()?;

    Some(PageRecord {
        path: path.to_string(),
        title: title.to_string(),
        snippet: optional_string(obj, "snippet"),
        content: optional_string(obj, "content"),
    })
}

fn optional_string(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}
