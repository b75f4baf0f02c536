//! Index location and docs root resolution
//!
//! Both run once at startup. The results are stored in
//! [`Services`](crate::core::services::Services) and never change.

use crate::core::config::Config;
use crate::core::error::{DocsError, Result};
use std::path::{Path, PathBuf};

/// Conventional index locations, probed in order relative to cwd
pub const DEFAULT_INDEX_FALLBACKS: [&str; 2] = ["mcp-index.json", "dist/mcp-index.json"];

/// Locate the page index file
///
/// An explicit `index.path` must exist. Without one, the conventional
/// locations under `cwd` are probed and the first existing file wins.
/// Nothing found is an error: the server does not start without an index.
pub fn locate_index(config: &Config, cwd: &Path) -> Result<PathBuf> {
    if let Some(path) = &config.index.path {
        let resolved = absolutize(path, cwd);
        if resolved.exists() {
            return Ok(resolved);
        }
        return Err(DocsError::IndexNotFound(format!(
            "{} does not exist",
            resolved.display()
        )));
    }

    DEFAULT_INDEX_FALLBACKS
        .iter()
        .map(|fallback| cwd.join(fallback))
        .find(|candidate| candidate.exists())
        .ok_or_else(|| {
            DocsError::IndexNotFound(format!(
                "no mcp-index.json under {}. Set VITEPRESS_INDEX_PATH or place mcp-index.json in the current directory",
                cwd.display()
            ))
        })
}

/// Resolve the docs root all page reads must stay under
///
/// An explicit `docs.root` is used as-is (made absolute, existence not
/// checked). Otherwise the root is the directory holding the index.
pub fn resolve_root(config: &Config, index_path: &Path, cwd: &Path) -> PathBuf {
    if let Some(root) = &config.docs.root {
        return absolutize(root, cwd);
    }

    let index_path = absolutize(index_path, cwd);
    match index_path.parent() {
        Some(parent) => parent.to_path_buf(),
        None => index_path,
    }
}

fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
