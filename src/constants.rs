//! Common constants used throughout the Tron application.

/// Placeholder recognised in template file and directory names
pub const PLACEHOLDER_TOKEN: &str = "$appname";

/// Suffix marking a template file that is renamed on copy
pub const TEMPLATE_SUFFIX: &str = ".tmpl";

/// Name of the scratch directory created under the documents folder
pub const STAGING_DIR_NAME: &str = "Temporary";

/// Name of the bundled templates directory next to the executable
pub const TEMPLATES_DIR_NAME: &str = "templates";

/// Extension of the archives produced while staging a project
pub const ARCHIVE_EXTENSION: &str = "tar.gz";
