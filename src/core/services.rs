//! Unified service container
//!
//! Holds the state computed once at startup: configuration, the loaded
//! page index and the page reader bound to the docs root. Everything is
//! read-only afterwards and shared through `Arc`.

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::index::load_index;
use crate::core::reader::PageReader;
use crate::core::root::{locate_index, resolve_root};
use crate::core::search;
use crate::core::types::PageRecord;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Loaded page index, in source order
    pub index: Arc<Vec<PageRecord>>,

    /// Page reader bound to the docs root
    pub reader: Arc<PageReader>,

    /// Location the index was loaded from
    pub index_path: Arc<PathBuf>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Locate and load the index, then resolve the docs root
    ///
    /// Fails only when no index file can be located. A located index
    /// that cannot be parsed loads as empty.
    pub fn load(config: Config, cwd: &Path) -> Result<Self> {
        let index_path = locate_index(&config, cwd)?;
        let root = resolve_root(&config, &index_path, cwd);
        let index = load_index(&index_path);

        tracing::info!(
            "Loaded {} page(s) from {}",
            index.len(),
            index_path.display()
        );
        tracing::info!("Docs root: {}", root.display());

        Ok(Self::from_parts(config, index, index_path, root))
    }

    /// Build services from already-loaded parts
    pub fn from_parts(
        config: Config,
        index: Vec<PageRecord>,
        index_path: PathBuf,
        root: PathBuf,
    ) -> Self {
        Self {
            index: Arc::new(index),
            reader: Arc::new(PageReader::new(root)),
            index_path: Arc::new(index_path),
            config: Arc::new(config),
        }
    }

    /// Docs root all reads are confined to
    pub fn root(&self) -> &Path {
        self.reader.root()
    }

    /// Search the index with the configured result limit
    pub fn search(&self, query: &str) -> Vec<&PageRecord> {
        self.search_with_limit(query, self.config.search.limit)
    }

    pub fn search_with_limit(&self, query: &str, limit: usize) -> Vec<&PageRecord> {
        search::search(query, &self.index, limit)
    }

    /// Read a page relative to the docs root
    pub fn read_page(&self, relative: &str) -> Result<String> {
        self.reader.read_page(relative)
    }
}
