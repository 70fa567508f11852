use crate::{
    errors::{FileOperation, IoError},
    vfs::{VirtualEntry, VirtualFS},
};
use colored::Colorize;
use miette::Diagnostic;
use std::{
    fs::{File, OpenOptions},
    path::Path,
    time::SystemTime,
};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum MaterializeError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Io(#[from] IoError),
}

/// Counts of entries processed by [`apply_vfs`], pre-existing ones included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub directories: usize,
    pub files: usize,
}

/// Creates every entry of a [`VirtualFS`] in input order.
///
/// Stops at the first failure. Entries created before it stay on disk.
pub fn apply_vfs(vfs: &VirtualFS) -> Result<Summary, MaterializeError> {
    let mut summary = Summary::default();

    for entry in &vfs.entries {
        apply_entry(entry)?;

        if entry.is_file() {
            summary.files += 1;
        } else {
            summary.directories += 1;
        }
    }

    log::debug!(
        "materialized {} directories and {} files under {}",
        summary.directories,
        summary.files,
        vfs.base.display()
    );

    Ok(summary)
}
fn apply_entry(entry: &VirtualEntry) -> Result<(), IoError> {
    let result = if entry.is_file() {
        touch_file(&entry.destination)
    } else {
        create_directory(&entry.destination)
    };

    result.map_err(|error| error.at_line(entry.line))
}
/// Creates a directory and any missing ancestors.
///
/// An existing directory is not an error.
///
/// # Errors
///
/// Returns an [`IoError`] if the path, or one of its ancestors, cannot be created.
pub fn create_directory(path: &Path) -> Result<(), IoError> {
    std::fs::create_dir_all(path)
        .map_err(|error| IoError::new(FileOperation::Mkdir, path.into(), error))?;

    log::debug!("ensured directory {}", path.display());

    println!("{} {}", "mkdir".blue(), path.display());

    Ok(())
}
/// Creates an empty file, or bumps the modification time of an existing entry.
///
/// Existing entries, directories included, are only opened for reading so their content is
/// never touched. Missing parents are not created.
///
/// # Errors
///
/// Returns an [`IoError`] if the file cannot be opened or its timestamp cannot be updated.
pub fn touch_file(path: &Path) -> Result<(), IoError> {
    let to_error = |error| IoError::new(FileOperation::Touch, path.into(), error);

    let file = if path.exists() {
        File::open(path).map_err(to_error)?
    } else {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(to_error)?
    };

    file.set_modified(SystemTime::now()).map_err(to_error)?;

    log::debug!("touched file {}", path.display());

    println!("{} {}", "touch".green(), path.display());

    Ok(())
}
