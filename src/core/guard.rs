//! Path containment for client-supplied document paths
//!
//! A path is admitted only if, after symlink resolution, it is the
//! docs root itself or lies beneath it. Lexical checks alone are not
//! enough: a symlink inside the root may point anywhere.

use std::path::{Component, Path, PathBuf};

/// Guards reads against escaping the docs root
#[derive(Debug, Clone)]
pub struct PathGuard {
    root: PathBuf,
}

impl PathGuard {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `relative` against the root
    ///
    /// Returns the canonical absolute path, or `None` when the path is
    /// absolute, still climbs out after normalization, cannot be
    /// resolved on disk, ends in a separator but is not a directory,
    /// or resolves outside the root.
    pub fn resolve(&self, relative: &str) -> Option<PathBuf> {
        let normalized = normalize(Path::new(relative));

        // After normalization only leading `..`, root and prefix
        // components can remain besides plain names.
        if !normalized
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
        {
            tracing::debug!("Rejected path {:?}: absolute or traversal", relative);
            return None;
        }

        let candidate = self.root.join(&normalized);

        let real_root = self.root.canonicalize().ok()?;
        let real_target = match candidate.canonicalize() {
            Ok(target) => target,
            Err(e) => {
                tracing::debug!("Rejected path {:?}: {}", relative, e);
                return None;
            }
        };

        // `page.md/` names a directory; a file there is ENOTDIR
        let trailing_separator = relative.chars().last().is_some_and(std::path::is_separator);
        if trailing_separator && !real_target.is_dir() {
            tracing::debug!("Rejected path {:?}: not a directory", relative);
            return None;
        }

        if real_target.strip_prefix(&real_root).is_err() {
            tracing::debug!(
                "Rejected path {:?}: resolves outside root to {}",
                relative,
                real_target.display()
            );
            return None;
        }

        Some(real_target)
    }
}

/// Lexically normalize a path
///
/// Drops `.` segments and folds `name/..` pairs. Leading `..` segments
/// are kept, and `..` directly after a root stays at the root.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    parts.iter().collect()
}
