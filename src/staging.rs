//! Scratch directory owned by a single run.

use log::{debug, error};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A staging directory that is removed when the run ends.
///
/// `release` deletes it and hands back any failure; if the area is dropped
/// without being released the deletion is still attempted and only logged.
#[derive(Debug)]
pub struct StagingArea {
    root: PathBuf,
    released: bool,
}

impl StagingArea {
    /// Ensures `root` exists. Leftovers from an earlier run are kept.
    pub fn acquire<P: Into<PathBuf>>(root: P) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        debug!("Staging area ready at '{}'", root.display());
        Ok(Self { root, released: false })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Removes the staging directory and everything in it.
    ///
    /// # Errors
    /// * `Error::Cleanup` if the directory cannot be removed
    pub fn release(mut self) -> Result<()> {
        self.released = true;
        self.remove()
    }

    fn remove(&self) -> Result<()> {
        match fs::remove_dir_all(&self.root) {
            Ok(()) => {
                debug!("Removed staging area '{}'", self.root.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => {
                Err(Error::Cleanup { staging_dir: self.root.display().to_string(), source })
            }
        }
    }
}

impl Drop for StagingArea {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        if let Err(e) = self.remove() {
            error!("{e}");
        }
    }
}
