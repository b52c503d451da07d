//! Lazy traversal of a directory tree.
//! Yields every entry below a root as a path relative to that root, so
//! copying, packing and tests all share one walk.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};

/// A file or directory found below a traversal root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    /// Path relative to the traversal root
    pub relative_path: PathBuf,
    pub is_dir: bool,
}

/// Walks `root`, yielding its entries parents-first.
///
/// The root itself is not yielded. When `recursive` is false only the
/// direct children of `root` are visited.
pub fn entries<P: AsRef<Path>>(
    root: P,
    recursive: bool,
) -> impl Iterator<Item = Result<TemplateEntry>> {
    let root = root.as_ref().to_path_buf();
    let mut walker = WalkDir::new(&root).min_depth(1).sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }

    walker.into_iter().map(move |dir_entry| {
        let dir_entry = dir_entry.map_err(|e| Error::WalkError {
            path: e
                .path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| root.display().to_string()),
            reason: e.to_string(),
        })?;
        let relative_path = dir_entry
            .path()
            .strip_prefix(&root)
            .map_err(|e| Error::WalkError {
                path: dir_entry.path().display().to_string(),
                reason: e.to_string(),
            })?
            .to_path_buf();
        Ok(TemplateEntry { relative_path, is_dir: dir_entry.file_type().is_dir() })
    })
}

/// Collects the relative paths of all files below `root`, sorted.
pub fn file_set<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in entries(root, true) {
        let entry = entry?;
        if !entry.is_dir {
            files.push(entry.relative_path);
        }
    }
    files.sort();
    Ok(files)
}
