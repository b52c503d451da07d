//! Tron is a project scaffolding tool.
//! It materialises a new project from a bundled template, substituting the
//! application name into file and directory names, and hands the result over
//! through a packed archive expanded at the final destination.

/// Gzipped tarball packing and unpacking
pub mod archive;

/// Template kinds and the catalog resolving their trees
pub mod catalog;

/// Command-line interface module for the Tron application
pub mod cli;

/// Configuration handling: template, staging and destination roots
/// Supports JSON and YAML files
pub mod config;

/// Common constants: placeholder token, template suffix, directory names
pub mod constants;

/// Recursive template copying with name rewriting
pub mod copier;

/// Error types and handling for the Tron application
pub mod error;

/// Logger initialisation
pub mod logger;

/// Orchestration of copy, pack, unpack and cleanup
pub mod pipeline;

/// Strict or lenient treatment of soft conditions
pub mod policy;

/// Placeholder substitution rules for path names
pub mod rewriter;

/// Scratch directory with guaranteed cleanup attempt
pub mod staging;

/// Lazy directory traversal shared by copying and packing
pub mod walk;
