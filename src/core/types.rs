//! Domain data structures

use serde::{Deserialize, Serialize};

/// One indexed documentation page
///
/// `path` is relative to the docs root. Records come from the page
/// index produced by the site build and are never mutated after load.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PageRecord {
    pub path: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl PageRecord {
    pub fn new(path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            snippet: None,
            content: None,
        }
    }

    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Preview text for the page: snippet, else content, else empty
    ///
    /// Used both for search scoring and for rendering result previews.
    pub fn preview_text(&self) -> &str {
        self.snippet
            .as_deref()
            .or(self.content.as_deref())
            .unwrap_or("")
    }
}
