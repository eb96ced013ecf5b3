//! Upload batch processing
//!
//! **Workflow:**
//! 1. Scan a directory (classify, group, load attributes)
//! 2. Assemble and sink every group in it, one at a time
//! 3. Descend into its subdirectories, depth-first
//! 4. After the whole tree, clean out the upload root
//!
//! Directory-level failures discard that directory's groups only. Nothing
//! here returns an error; failures surface as log records and report counts.

use crate::config::IngestSettings;
use crate::db::DocumentSink;
use crate::models::{DestinationFolders, IngestReport};
use crate::services::document_assembler::DocumentAssembler;
use crate::services::resource_sink::ResourceSink;
use crate::services::upload_scanner::scan_directory;
use remarc_common::EnvLookup;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Runs ingestion batches
pub struct UploadProcessor {
    settings: IngestSettings,
    store: Arc<dyn DocumentSink>,
    assembler: DocumentAssembler,
}

impl UploadProcessor {
    pub fn new(
        settings: IngestSettings,
        store: Arc<dyn DocumentSink>,
        env: Arc<dyn EnvLookup>,
    ) -> Self {
        let assembler = DocumentAssembler::new(settings.urls.clone(), env);
        Self {
            settings,
            store,
            assembler,
        }
    }

    fn destinations(&self, resources_root: &Path) -> DestinationFolders {
        DestinationFolders::new(resources_root, self.settings.folders.clone())
    }

    /// Ingest the whole upload tree, then empty the upload root
    pub async fn process_upload_dir(&self, upload_root: &Path, resources_root: &Path) -> IngestReport {
        info!(
            upload = %upload_root.display(),
            resources = %resources_root.display(),
            "Processing resources within upload directory"
        );

        let sink = ResourceSink::new(self.store.clone(), self.destinations(resources_root));
        let mut report = IngestReport::default();

        // Depth-first: a directory's children are pushed in reverse so the
        // first child (and its whole subtree) is visited before the next one
        let mut pending = vec![upload_root.to_path_buf()];
        while let Some(directory) = pending.pop() {
            let subdirectories = self.process_directory(&directory, &sink, &mut report).await;
            pending.extend(subdirectories.into_iter().rev());
        }

        report.cleanup_succeeded = if upload_root.is_dir() {
            match clean_directory(upload_root) {
                Ok(()) => true,
                Err(e) => {
                    error!(upload = %upload_root.display(), error = %e, "Could not clean upload folder");
                    false
                }
            }
        } else {
            false
        };

        if report.is_complete() {
            info!(%report, "Upload processed");
        } else {
            warn!(%report, "Upload processed with failures");
        }

        report
    }

    /// Process one directory; returns its subdirectories to visit next
    async fn process_directory(
        &self,
        directory: &Path,
        sink: &ResourceSink,
        report: &mut IngestReport,
    ) -> Vec<PathBuf> {
        let scan = match scan_directory(directory) {
            Ok(scan) => scan,
            Err(e) => {
                warn!(directory = %directory.display(), error = %e, "Skipping directory");
                report.directories_aborted += 1;
                return Vec::new();
            }
        };

        report.directories_scanned += 1;
        report.files_skipped += scan.skipped_files;

        if scan.groups.is_empty() {
            tracing::debug!(directory = %directory.display(), "No content files in directory");
            return scan.subdirectories;
        }

        let attributes = match &scan.attributes {
            Ok(attributes) => attributes,
            Err(e) => {
                warn!(
                    directory = %directory.display(),
                    groups = scan.groups.len(),
                    error = %e,
                    "Abort directory"
                );
                report.directories_aborted += 1;
                return scan.subdirectories;
            }
        };

        for group in &scan.groups {
            tracing::debug!(id = group.id(), kind = %group.dominant_kind(), "Processing group");
            let document = self.assembler.assemble(group, attributes);
            let outcome = sink.sink(group, &document).await;
            report.record(outcome);
        }

        info!(
            directory = %directory.display(),
            groups = scan.groups.len(),
            "Upload finished for directory"
        );

        scan.subdirectories
    }
}

/// Remove everything inside `directory`, keeping the directory itself
///
/// Attempts every entry; returns the last failure if any.
fn clean_directory(directory: &Path) -> io::Result<()> {
    let mut result = Ok(());

    for entry in fs::read_dir(directory)? {
        let removed = entry.and_then(|entry| {
            let path = entry.path();
            if entry.file_type()?.is_dir() {
                fs::remove_dir_all(&path)
            } else {
                fs::remove_file(&path)
            }
        });

        if let Err(e) = removed {
            warn!(directory = %directory.display(), error = %e, "Failed to remove upload entry");
            result = Err(e);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_directory_keeps_root() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("a/b")).unwrap();
        fs::write(root.join("a/b/IMG1.jpg"), b"jpeg").unwrap();
        fs::write(root.join("upload.properties"), b"theme=x").unwrap();

        clean_directory(root).unwrap();

        assert!(root.exists());
        assert_eq!(fs::read_dir(root).unwrap().count(), 0);
    }

    #[test]
    fn test_clean_missing_directory_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(clean_directory(&temp_dir.path().join("gone")).is_err());
    }
}
