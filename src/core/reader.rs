//! Page reads with type and size limits

use crate::core::error::{DocsError, Result};
use crate::core::guard::PathGuard;
use std::fs;
use std::path::{Path, PathBuf};

/// File extensions that may be read (compared lower-cased, without dot)
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["md", "html", "htm", "txt"];

/// Maximum readable file size (2 MiB)
pub const MAX_FILE_SIZE_BYTES: u64 = 2 * 1024 * 1024;

/// Reads documentation pages from beneath the docs root
#[derive(Debug, Clone)]
pub struct PageReader {
    guard: PathGuard,
}

impl PageReader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            guard: PathGuard::new(root),
        }
    }

    pub fn root(&self) -> &Path {
        self.guard.root()
    }

    /// Read the page at `relative`
    ///
    /// Checks run in order: containment, existence as a regular file,
    /// extension, size. The file is re-examined on every call.
    pub fn read_page(&self, relative: &str) -> Result<String> {
        let resolved = self
            .guard
            .resolve(relative)
            .ok_or_else(|| DocsError::InvalidPath(relative.to_string()))?;

        let metadata = match fs::metadata(&resolved) {
            Ok(metadata) if metadata.is_file() => metadata,
            _ => return Err(DocsError::NotFound(relative.to_string())),
        };

        if !has_allowed_extension(&resolved) {
            return Err(DocsError::UnsupportedType(relative.to_string()));
        }

        if metadata.len() > MAX_FILE_SIZE_BYTES {
            return Err(DocsError::TooLarge {
                path: relative.to_string(),
                limit: MAX_FILE_SIZE_BYTES,
            });
        }

        let bytes = fs::read(&resolved)?;
        tracing::debug!("Read {} ({} bytes)", resolved.display(), bytes.len());

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Check the file extension against [`ALLOWED_EXTENSIONS`]
pub fn has_allowed_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
}
