//! Error handling for the Tron application.
//! Defines the error kinds raised while scaffolding a project and the
//! process exit code each of them maps to.

use std::io;
use thiserror::Error;

/// Custom error types for Tron operations.
///
/// Every variant that can end a run carries its own exit code so scripts
/// driving the CLI can tell the failures apart.
#[derive(Error, Debug)]
pub enum Error {
    /// The template tree for the requested kind does not exist.
    #[error("Template directory '{template_dir}' does not exist.")]
    SourceMissing { template_dir: String },

    /// Packing the staged tree into an archive failed.
    #[error("Cannot create archive '{archive}': {reason}.")]
    ArchiveCreation { archive: String, reason: String },

    /// The unpack target already exists and will not be overwritten.
    #[error("Unable to create new project because directory '{destination}' already exists.")]
    DestinationExists { destination: String },

    /// The staging area could not be removed after the run.
    #[error("Failed to remove staging area '{staging_dir}': {source}.")]
    Cleanup {
        staging_dir: String,
        #[source]
        source: io::Error,
    },

    /// Represents errors that occur during configuration loading.
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents errors that occur while walking a directory tree.
    #[error("Cannot traverse '{path}': {reason}.")]
    WalkError { path: String, reason: String },

    /// Represents errors that occur during file system operations.
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),
}

impl Error {
    /// Process exit code reported for this error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::IoError(_) => 1,
            Error::ConfigError(_) => 2,
            Error::SourceMissing { .. } => 3,
            Error::ArchiveCreation { .. } => 4,
            Error::DestinationExists { .. } => 5,
            Error::Cleanup { .. } => 6,
            Error::WalkError { .. } => 7,
        }
    }
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with the kind's exit code
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(err.exit_code());
}
