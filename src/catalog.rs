//! Template kinds and where their trees live.
use log::debug;
use std::path::PathBuf;

use crate::constants::ARCHIVE_EXTENSION;

/// The kinds of project Tron can scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// Plain JS/CSS/HTML application
    Basic,
    /// React application
    ReactApp,
}

impl TemplateKind {
    /// Name of the template directory for this kind.
    pub fn dir_name(&self) -> &'static str {
        match self {
            TemplateKind::Basic => "basic",
            TemplateKind::ReactApp => "react-app",
        }
    }

    /// File name of the archive staged for this kind.
    pub fn archive_name(&self) -> String {
        format!("{}.{ARCHIVE_EXTENSION}", self.dir_name())
    }
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

/// Maps a template kind to the root of its read-only template tree.
pub trait TemplateCatalog {
    /// Returns the template root for `kind`. The path is not checked for existence.
    fn resolve(&self, kind: TemplateKind) -> PathBuf;
}

/// Catalog backed by a directory holding one subdirectory per kind.
pub struct DirectoryCatalog {
    root: PathBuf,
}

impl DirectoryCatalog {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }
}

impl TemplateCatalog for DirectoryCatalog {
    fn resolve(&self, kind: TemplateKind) -> PathBuf {
        let path = self.root.join(kind.dir_name());
        debug!("Using {kind} template from '{}'", path.display());
        path
    }
}
