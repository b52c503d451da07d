//! Gzipped tarball packing and unpacking.
//! The staged project is packed into a single `.tar.gz` file and expanded
//! again at its final destination.

use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use log::{debug, warn};
use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{
    error::{Error, Result},
    walk::entries,
};

fn creation_error(archive: &Path, reason: impl ToString) -> Error {
    Error::ArchiveCreation { archive: archive.display().to_string(), reason: reason.to_string() }
}

/// Packs the contents of `source_dir` into a new archive at `archive_path`.
///
/// Entries are stored relative to `source_dir`, so unpacking reproduces the
/// directory's contents rather than the directory itself.
///
/// # Returns
/// * `Result<PathBuf>` - Path of the written archive
///
/// # Errors
/// * `Error::ArchiveCreation` if `source_dir` is missing, an archive already
///   exists at `archive_path`, or any entry cannot be written
pub fn pack<P: AsRef<Path>, Q: AsRef<Path>>(source_dir: P, archive_path: Q) -> Result<PathBuf> {
    let source_dir = source_dir.as_ref();
    let archive_path = archive_path.as_ref();

    if !source_dir.is_dir() {
        return Err(creation_error(
            archive_path,
            format!("source directory '{}' does not exist", source_dir.display()),
        ));
    }

    let file = OpenOptions::new().write(true).create_new(true).open(archive_path).map_err(|e| {
        if e.kind() == ErrorKind::AlreadyExists {
            creation_error(archive_path, "archive already exists")
        } else {
            creation_error(archive_path, e)
        }
    })?;

    debug!("Packing '{}' into '{}'", source_dir.display(), archive_path.display());

    let written = write_entries(source_dir, file, archive_path);
    if written.is_err() {
        // A half-written archive must not be mistaken for a packed tree.
        if let Err(e) = fs::remove_file(archive_path) {
            warn!("Failed to remove incomplete archive '{}': {e}", archive_path.display());
        }
    }
    written?;

    Ok(archive_path.to_path_buf())
}

fn write_entries(source_dir: &Path, file: File, archive_path: &Path) -> Result<()> {
    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = tar::Builder::new(encoder);

    for entry in entries(source_dir, true) {
        let entry = entry?;
        let full_path = source_dir.join(&entry.relative_path);
        let appended = if entry.is_dir {
            builder.append_dir(&entry.relative_path, &full_path)
        } else {
            builder.append_path_with_name(&full_path, &entry.relative_path)
        };
        appended.map_err(|e| creation_error(archive_path, e))?;
    }

    let encoder = builder.into_inner().map_err(|e| creation_error(archive_path, e))?;
    encoder.finish().map_err(|e| creation_error(archive_path, e))?;
    Ok(())
}

/// Expands `archive_path` into `destination`, which must not exist yet.
///
/// # Errors
/// * `Error::DestinationExists` if `destination` exists; nothing is extracted
/// * `Error::IoError` if the archive cannot be read or extraction fails, in
///   which case the partially written destination is removed
pub fn unpack<P: AsRef<Path>, Q: AsRef<Path>>(archive_path: P, destination: Q) -> Result<()> {
    let archive_path = archive_path.as_ref();
    let destination = destination.as_ref();

    if destination.exists() {
        return Err(Error::DestinationExists { destination: destination.display().to_string() });
    }

    let file = File::open(archive_path)?;
    debug!("Unpacking '{}' into '{}'", archive_path.display(), destination.display());

    fs::create_dir_all(destination)?;
    let mut archive = tar::Archive::new(GzDecoder::new(file));
    if let Err(e) = archive.unpack(destination) {
        if let Err(cleanup) = fs::remove_dir_all(destination) {
            warn!("Failed to remove partial destination '{}': {cleanup}", destination.display());
        }
        return Err(Error::IoError(e));
    }

    Ok(())
}

/// Lists the relative paths stored in an archive, in archive order.
pub fn list<P: AsRef<Path>>(archive_path: P) -> Result<Vec<PathBuf>> {
    let file = File::open(archive_path.as_ref())?;
    let mut archive = tar::Archive::new(GzDecoder::new(file));
    let mut paths = Vec::new();
    for entry in archive.entries()? {
        let entry = entry?;
        paths.push(entry.path()?.into_owned());
    }
    Ok(paths)
}
