// Test fixtures for integration testing

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Index used by the search scenarios
#[allow(dead_code)] // Used in integration tests
pub fn sample_index_json() -> &'static str {
    r#"[
        {"path": "a.md", "title": "Intro", "snippet": "hello world"},
        {"path": "b.md", "title": "Other", "content": "world peace"}
    ]"#
}

/// Synthetic built docs site: a temp directory holding pages and an index
#[allow(dead_code)] // Used in integration tests
pub struct DocsSite {
    pub dir: TempDir,
}

#[allow(dead_code)] // Used in integration tests
impl DocsSite {
    /// Empty site with an empty index
    pub fn empty() -> Self {
        Self::with_files(&[("mcp-index.json", "[]")])
    }

    /// Small site matching [`sample_index_json`] plus a guide page
    pub fn small() -> Self {
        Self::with_files(&[
            ("mcp-index.json", sample_index_json()),
            ("a.md", "# Intro\n\nhello world\n"),
            ("b.md", "# Other\n\nworld peace\n"),
            ("guide/intro.md", "# Getting Started\n\nInstall the theme.\n"),
            ("guide/page.html", "<h1>Page</h1>"),
            ("notes.exe", "MZ"),
        ])
    }

    /// Site with the given `(relative path, content)` files
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let site = Self { dir };
        for (path, content) in files {
            site.write(path, content.as_bytes());
        }
        site
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn index_path(&self) -> PathBuf {
        self.root().join("mcp-index.json")
    }

    /// Write a file under the site root, creating parent directories
    pub fn write(&self, relative: &str, content: &[u8]) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    /// Create a symlink at `relative` pointing to `target`
    #[cfg(unix)]
    pub fn symlink(&self, relative: &str, target: &Path) {
        let link = self.root().join(relative);
        if let Some(parent) = link.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::os::unix::fs::symlink(target, link).expect("Failed to create symlink");
    }
}
