//! Persistence and relocation of assembled groups
//!
//! Two independent effects per document, in order, neither rolled back:
//! 1. Insert into the collection for the group's dominant kind
//! 2. Copy every non-metadata file into the dominant kind's folder
//!
//! Copy failures are logged per file and do not stop the remaining copies.

use crate::db::DocumentSink;
use crate::models::{AssembledDocument, DestinationFolders, ItemGroup, ResourceKind, SinkOutcome};
use crate::services::classifier::{classify_file_name, file_name_of};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Writes documents and relocates their files
pub struct ResourceSink {
    store: Arc<dyn DocumentSink>,
    destinations: DestinationFolders,
}

impl ResourceSink {
    pub fn new(store: Arc<dyn DocumentSink>, destinations: DestinationFolders) -> Self {
        Self {
            store,
            destinations,
        }
    }

    /// Insert `document` and copy the group's content files
    pub async fn sink(&self, group: &ItemGroup, document: &AssembledDocument) -> SinkOutcome {
        let mut outcome = SinkOutcome::default();
        let dominant = group.dominant_kind();

        match dominant.collection() {
            Some(collection) => {
                tracing::debug!(
                    collection = %collection,
                    id = %document.id,
                    "Writing document to collection"
                );
                match self.store.insert(collection, document).await {
                    Ok(()) => outcome.inserted = true,
                    Err(e) => {
                        tracing::error!(
                            collection = %collection,
                            id = %document.id,
                            error = %e,
                            "Failed to insert document"
                        );
                        outcome.insert_failed = true;
                    }
                }
            }
            None => {
                tracing::warn!(
                    id = %document.id,
                    kind = %dominant,
                    "Group has no content files, no collection to write to"
                );
                outcome.insert_skipped = true;
            }
        }

        let Some(destination) = self.destinations.for_kind(dominant) else {
            return outcome;
        };

        tracing::debug!(destination = %destination.display(), id = group.id(), "Copying resources");

        for file in group.files() {
            if classify_file_name(&file_name_of(file)) == Some(ResourceKind::Information) {
                continue;
            }

            match copy_file_to_directory(file, &destination) {
                Ok(copied) => {
                    tracing::debug!(from = %file.display(), to = %copied.display(), "Copied resource");
                    outcome.files_copied += 1;
                }
                Err(e) => {
                    tracing::error!(
                        file = %file.display(),
                        destination = %destination.display(),
                        error = %e,
                        "Couldn't copy resource to directory"
                    );
                    outcome.copy_failures += 1;
                }
            }
        }

        outcome
    }
}

/// Copy `file` into `directory`, creating the directory if needed
pub fn copy_file_to_directory(file: &Path, directory: &Path) -> io::Result<PathBuf> {
    let name = file.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} has no file name", file.display()),
        )
    })?;

    fs::create_dir_all(directory)?;
    let target = directory.join(name);
    fs::copy(file, &target)?;
    Ok(target)
}
