/// Moving files into category directories without overwriting anything.
///
/// This module resolves a collision-free destination inside a category
/// directory, creates the directory on demand and performs the move, falling
/// back to copy-then-delete when source and destination live on different
/// filesystems.
use crate::file_category::split_file_name;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Errors that can occur during an organization run.
#[derive(Debug)]
pub enum OrganizeError {
    /// Failed to create a directory (base layout or category folder).
    DirectoryCreationFailed { path: PathBuf, source: io::Error },
    /// The input directory could not be listed.
    ReadDirFailed { path: PathBuf, source: io::Error },
    /// Failed to move a file to its category directory.
    FileMoveFailure {
        source: PathBuf,
        destination: PathBuf,
        source_error: io::Error,
    },
    /// Failed to write the report file.
    ReportWriteFailed { path: PathBuf, source: io::Error },
    /// Failed to read the report file.
    ReportReadFailed { path: PathBuf, source: io::Error },
    /// Report file has invalid format.
    InvalidReportFormat { reason: String },
}

impl std::fmt::Display for OrganizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DirectoryCreationFailed { path, source } => {
                write!(
                    f,
                    "Failed to create directory {}: {}",
                    path.display(),
                    source
                )
            }
            Self::ReadDirFailed { path, source } => {
                write!(f, "Failed to read directory {}: {}", path.display(), source)
            }
            Self::FileMoveFailure {
                source,
                destination,
                source_error,
            } => {
                write!(
                    f,
                    "Failed to move {} to {}: {}",
                    source.display(),
                    destination.display(),
                    source_error
                )
            }
            Self::ReportWriteFailed { path, source } => {
                write!(f, "Failed to write report {}: {}", path.display(), source)
            }
            Self::ReportReadFailed { path, source } => {
                write!(f, "Failed to read report {}: {}", path.display(), source)
            }
            Self::InvalidReportFormat { reason } => {
                write!(f, "Invalid report format: {}", reason)
            }
        }
    }
}

impl std::error::Error for OrganizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DirectoryCreationFailed { source, .. }
            | Self::ReadDirFailed { source, .. }
            | Self::ReportWriteFailed { source, .. }
            | Self::ReportReadFailed { source, .. } => Some(source),
            Self::FileMoveFailure { source_error, .. } => Some(source_error),
            Self::InvalidReportFormat { .. } => None,
        }
    }
}

/// Result type for file organization operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// Creates `path` and any missing parents. Succeeds if it already exists.
pub(crate) fn ensure_dir(path: &Path) -> OrganizeResult<()> {
    fs::create_dir_all(path).map_err(|e| OrganizeError::DirectoryCreationFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Moves files into destination directories.
pub struct FileOrganizer;

impl FileOrganizer {
    /// Moves `source` into `destination_dir` and returns the path actually used.
    ///
    /// The destination directory (and its parents) is created if absent. When a
    /// file with the same name is already there, the name gets a ` (1)`, ` (2)`, ...
    /// suffix before the extension, probing sequentially for the first free slot.
    ///
    /// # Errors
    ///
    /// Returns [`OrganizeError::DirectoryCreationFailed`] if the directory cannot
    /// be created and [`OrganizeError::FileMoveFailure`] if the source is missing
    /// or the move fails. Nothing is suppressed.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tidyup::file_organizer::FileOrganizer;
    /// use std::path::Path;
    ///
    /// let moved = FileOrganizer::move_file(
    ///     Path::new("/home/me/input/boleto.pdf"),
    ///     Path::new("/home/me/organized/docs"),
    /// );
    ///
    /// match moved {
    ///     Ok(path) => println!("Moved to {}", path.display()),
    ///     Err(e) => eprintln!("Move failed: {}", e),
    /// }
    /// ```
    pub fn move_file(source: &Path, destination_dir: &Path) -> OrganizeResult<PathBuf> {
        ensure_dir(destination_dir)?;

        let destination = Self::resolve_destination(source, destination_dir).ok_or_else(|| {
            OrganizeError::FileMoveFailure {
                source: source.to_path_buf(),
                destination: destination_dir.to_path_buf(),
                source_error: io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "file has no name component",
                ),
            }
        })?;

        relocate(source, &destination).map_err(|e| OrganizeError::FileMoveFailure {
            source: source.to_path_buf(),
            destination: destination.clone(),
            source_error: e,
        })?;

        debug!(from = %source.display(), to = %destination.display(), "moved file");
        Ok(destination)
    }

    /// Returns the first unused path for `source`'s name inside `destination_dir`.
    ///
    /// `destination_dir/name` is tried first, then `"{stem} ({i}){ext}"` for
    /// i = 1, 2, ... Returns `None` if `source` has no file name.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tidyup::file_organizer::FileOrganizer;
    /// use std::path::Path;
    ///
    /// // with report.pdf and report (1).pdf already present in docs/
    /// let next = FileOrganizer::resolve_destination(
    ///     Path::new("input/report.pdf"),
    ///     Path::new("organized/docs"),
    /// );
    /// assert_eq!(next, Some(Path::new("organized/docs/report (2).pdf").to_path_buf()));
    /// ```
    pub fn resolve_destination(source: &Path, destination_dir: &Path) -> Option<PathBuf> {
        let file_name = source.file_name()?;
        let candidate = destination_dir.join(file_name);
        if !is_taken(&candidate) {
            return Some(candidate);
        }

        let (stem, ext) = split_file_name(source);
        let ext = ext.map(|e| format!(".{}", e)).unwrap_or_default();

        (1u64..)
            .map(|i| destination_dir.join(format!("{} ({}){}", stem, i, ext)))
            .inspect(|path| debug!(candidate = %path.display(), "probing for free name"))
            .find(|path| !is_taken(path))
    }
}

/// True if anything occupies `path`, including a symlink whose target is gone.
fn is_taken(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Renames `source` to `destination`, copying across filesystems when needed.
fn relocate(source: &Path, destination: &Path) -> io::Result<()> {
    match fs::rename(source, destination) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            debug!(from = %source.display(), "rename crosses devices, copying instead");
            copy_then_remove(source, destination)
        }
        Err(e) => Err(e),
    }
}

/// Copies `source` to `destination`, then deletes `source`.
///
/// A failed copy removes the partial destination. A failed delete is an error
/// even though the copy already landed.
fn copy_then_remove(source: &Path, destination: &Path) -> io::Result<()> {
    if let Err(copy_err) = fs::copy(source, destination) {
        let _ = fs::remove_file(destination);
        return Err(copy_err);
    }
    fs::remove_file(source)
}
