//! Template tree copying.
//! Copies a read-only template tree into a working location, rewriting every
//! file and directory name through the `TokenRewriter` on the way.

use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    error::{Error, Result},
    policy::FailurePolicy,
    rewriter::TokenRewriter,
    walk::entries,
};

/// Counts of what a copy produced.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopyReport {
    pub files: usize,
    pub directories: usize,
}

pub struct TreeCopier {
    rewriter: TokenRewriter,
    policy: FailurePolicy,
}

/// Resolves a path to an absolute form without requiring it to exist.
fn absolute(path: &Path) -> Result<PathBuf> {
    if let Ok(canonical) = path.canonicalize() {
        return Ok(canonical);
    }
    std::path::absolute(path).map_err(Error::IoError)
}

impl TreeCopier {
    pub fn new(rewriter: TokenRewriter, policy: FailurePolicy) -> Self {
        Self { rewriter, policy }
    }

    /// Copies `source_root` into `target_root`, rewriting names for `app_name`.
    ///
    /// # Arguments
    /// * `source_root` - Template tree to read from; never modified
    /// * `target_root` - Directory receiving the rewritten copy, created if absent
    /// * `app_name` - Substitution value for the placeholder token
    /// * `recursive` - Whether subdirectories are copied as well
    ///
    /// # Errors
    /// * `Error::SourceMissing` if the source does not exist under the strict policy
    /// * `Error::IoError` if a directory cannot be created or a file copied
    pub fn copy_tree<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        source_root: P,
        target_root: Q,
        app_name: &str,
        recursive: bool,
    ) -> Result<CopyReport> {
        let source_root = absolute(source_root.as_ref())?;
        let target_root = absolute(target_root.as_ref())?;
        let mut report = CopyReport::default();

        if source_root == target_root {
            debug!("Source and target are both '{}', nothing to copy", source_root.display());
            return Ok(report);
        }

        fs::create_dir_all(&target_root)?;

        if !source_root.exists() {
            let err = Error::SourceMissing { template_dir: source_root.display().to_string() };
            if self.policy.is_strict() {
                return Err(err);
            }
            warn!("{err}");
            return Ok(report);
        }

        for entry in entries(&source_root, recursive) {
            let entry = entry?;
            let relative_target =
                self.rewriter.rewrite_path(&entry.relative_path, app_name, entry.is_dir);
            let target = target_root.join(&relative_target);

            if entry.is_dir {
                debug!("Creating directory: {}", target.display());
                fs::create_dir_all(&target)?;
                report.directories += 1;
            } else {
                debug!("Copying file: {}", target.display());
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::copy(source_root.join(&entry.relative_path), &target)?;
                report.files += 1;
            }
        }

        Ok(report)
    }
}

impl Default for TreeCopier {
    fn default() -> Self {
        TreeCopier::new(TokenRewriter::default(), FailurePolicy::default())
    }
}
