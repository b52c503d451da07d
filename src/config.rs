//! Configuration handling for Tron.
//! Resolves the three filesystem roots a run works with: where templates are
//! read from, where staging happens and where new projects are created.

use crate::constants::{STAGING_DIR_NAME, TEMPLATES_DIR_NAME};
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Filesystem roots used by a scaffolding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    /// Directory holding one template tree per template kind
    pub template_root: PathBuf,
    /// Scratch directory, created and removed on every run
    pub staging_root: PathBuf,
    /// Directory in which `<app name>/` is created
    pub destination_root: PathBuf,
}

/// Any subset of the roots, as read from a configuration file.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub template_root: Option<PathBuf>,
    #[serde(default)]
    pub staging_root: Option<PathBuf>,
    #[serde(default)]
    pub destination_root: Option<PathBuf>,
}

/// The user's documents folder, or their home directory when the platform has none.
fn documents_dir() -> Result<PathBuf> {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| Error::ConfigError("cannot locate the documents directory".to_string()))
}

/// Templates shipped next to the executable, or the crate's own during development.
fn default_template_root() -> PathBuf {
    let installed = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(TEMPLATES_DIR_NAME)));
    match installed {
        Some(path) if path.is_dir() => path,
        _ => Path::new(env!("CARGO_MANIFEST_DIR")).join(TEMPLATES_DIR_NAME),
    }
}

impl ScaffoldConfig {
    pub fn new<P: Into<PathBuf>>(template_root: P, staging_root: P, destination_root: P) -> Self {
        Self {
            template_root: template_root.into(),
            staging_root: staging_root.into(),
            destination_root: destination_root.into(),
        }
    }

    /// Takes every root `overrides` sets and fills the rest with defaults:
    /// bundled templates, `<documents>/Temporary` and `<documents>`.
    ///
    /// The documents directory is only looked up when a root still needs it.
    ///
    /// # Errors
    /// * `Error::ConfigError` if a default root needs a documents directory
    ///   and none can be found
    pub fn resolve(overrides: ConfigFile) -> Result<Self> {
        let template_root = overrides.template_root.unwrap_or_else(default_template_root);
        let staging_root = match overrides.staging_root {
            Some(path) => path,
            None => documents_dir()?.join(STAGING_DIR_NAME),
        };
        let destination_root = match overrides.destination_root {
            Some(path) => path,
            None => documents_dir()?,
        };
        Ok(Self { template_root, staging_root, destination_root })
    }
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML
pub fn parse_config(content: &str) -> Result<ConfigFile> {
    match serde_json::from_str(content) {
        Ok(file) => Ok(file),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}"))),
    }
}

/// Reads a configuration file from disk.
///
/// # Errors
/// * `Error::ConfigError` if the file cannot be read or parsed
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<ConfigFile> {
    let config_path = config_path.as_ref();
    debug!("Loading configuration from {}", config_path.display());
    let content = std::fs::read_to_string(config_path).map_err(|e| {
        Error::ConfigError(format!("cannot read '{}': {e}", config_path.display()))
    })?;
    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_uses_every_override() {
        let config = ScaffoldConfig::resolve(ConfigFile {
            template_root: Some(PathBuf::from("/opt/templates")),
            staging_root: Some(PathBuf::from("/tmp/stage")),
            destination_root: Some(PathBuf::from("/srv/projects")),
        })
        .unwrap();
        assert_eq!(config, ScaffoldConfig::new("/opt/templates", "/tmp/stage", "/srv/projects"));
    }
}
