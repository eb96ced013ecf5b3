//! Upload directory scanner
//!
//! Scans ONE directory level: immediate files are classified and grouped,
//! immediate subdirectories are returned for the caller to visit after this
//! directory's groups have been sunk.
//!
//! **Algorithm:**
//! 1. List entries, sorted by file name
//! 2. Directories → deferred subdirectory list
//! 3. Files → classify by extension:
//!    - Properties → the directory's properties file (last one wins)
//!    - unrecognised → skipped
//!    - otherwise → added to the group for its base name
//! 4. Load directory attributes from the properties file

use crate::error::{PropertiesError, ScanError};
use crate::models::{DirectoryAttributes, ItemGroup, ResourceKind};
use crate::services::classifier::{classify_extension, split_file_name};
use crate::services::item_grouper::ItemGrouper;
use crate::services::properties_loader::load_directory_attributes;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of scanning one directory
#[derive(Debug)]
pub struct DirectoryScan {
    pub directory: PathBuf,
    /// Item groups in first-seen order
    pub groups: Vec<ItemGroup>,
    /// Directory attributes, or why they could not be loaded
    pub attributes: Result<DirectoryAttributes, PropertiesError>,
    pub properties_file: Option<PathBuf>,
    /// Immediate subdirectories, in name order
    pub subdirectories: Vec<PathBuf>,
    /// Files skipped for an unrecognised extension
    pub skipped_files: usize,
}

/// Scan one directory level
pub fn scan_directory(directory: &Path) -> Result<DirectoryScan, ScanError> {
    if !directory.exists() {
        return Err(ScanError::PathNotFound(directory.to_path_buf()));
    }

    if !directory.is_dir() {
        return Err(ScanError::NotADirectory(directory.to_path_buf()));
    }

    tracing::debug!(directory = %directory.display(), "Scanning directory");

    let read_dir = fs::read_dir(directory).map_err(|source| ScanError::Unreadable {
        path: directory.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    for entry in read_dir {
        match entry {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                tracing::warn!(directory = %directory.display(), error = %e, "Error accessing entry");
                // Continue scanning, don't abort
            }
        }
    }
    entries.sort_by_key(|e| e.file_name());

    let mut grouper = ItemGrouper::new();
    let mut subdirectories = Vec::new();
    let mut properties_file = None;
    let mut skipped_files = 0;

    for entry in entries {
        let path = entry.path();
        let file_name = entry.file_name().to_string_lossy().into_owned();

        if is_directory_entry(&entry, &path) {
            tracing::debug!(directory = %path.display(), "Deferring subdirectory");
            subdirectories.push(path);
            continue;
        }

        let (id, extension) = split_file_name(&file_name);

        match classify_extension(extension) {
            None => {
                tracing::debug!(file = %file_name, extension, "Unrecognised extension, skipping file");
                skipped_files += 1;
            }
            Some(ResourceKind::Properties) => {
                if let Some(previous) = properties_file.replace(path) {
                    tracing::warn!(
                        directory = %directory.display(),
                        previous = %previous.display(),
                        "Multiple properties files, using the last one"
                    );
                }
            }
            Some(kind) => {
                tracing::debug!(file = %file_name, id, %kind, "Classified file");
                grouper.add(id, path, kind);
            }
        }
    }

    let attributes = load_directory_attributes(properties_file.as_deref());

    tracing::debug!(
        directory = %directory.display(),
        groups = grouper.len(),
        subdirectories = subdirectories.len(),
        skipped = skipped_files,
        "Directory scan complete"
    );

    Ok(DirectoryScan {
        directory: directory.to_path_buf(),
        groups: grouper.into_groups(),
        attributes,
        properties_file,
        subdirectories,
        skipped_files,
    })
}

/// Directory entries are deferred; symlinked directories are not followed
fn is_directory_entry(entry: &fs::DirEntry, path: &Path) -> bool {
    match entry.file_type() {
        Ok(ft) if ft.is_dir() => true,
        Ok(ft) if ft.is_symlink() => {
            if path.is_dir() {
                tracing::warn!(path = %path.display(), "Not following symlinked directory");
            }
            false
        }
        Ok(_) => false,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Unable to determine entry type");
            false
        }
    }
}
