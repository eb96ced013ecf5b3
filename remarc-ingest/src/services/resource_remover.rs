//! Deletion of relocated resources by identifier
//!
//! Every entry named `<id>.*` in the kind's folder is force-deleted. Unlike
//! the copy path, the first failed deletion ends the call: remaining matches
//! are left in place and the call reports failure.

use crate::error::{IngestError, IngestResult};
use crate::models::{DestinationFolders, ResourceKind};
use globset::{Glob, GlobMatcher};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Delete every resource of `kind` whose base name is `id`
///
/// Returns `Ok(false)` if the folder cannot be listed or a deletion fails.
/// Properties and Information have no folder and are rejected.
pub fn delete_resource_for_id(
    destinations: &DestinationFolders,
    kind: ResourceKind,
    id: &str,
) -> IngestResult<bool> {
    tracing::debug!(id, %kind, "Deleting resources");

    let folder = destinations
        .for_kind(kind)
        .ok_or(IngestError::InvalidResourceKind(kind))?;

    let matcher = id_matcher(id)?;

    let matches = match matching_entries(&folder, &matcher) {
        Ok(matches) => matches,
        Err(e) => {
            tracing::error!(folder = %folder.display(), error = %e, "Couldn't list resource folder");
            return Ok(false);
        }
    };

    Ok(remove_until_failure(&matches, force_delete))
}

/// Wildcard `<id>.*`, with glob metacharacters in `id` taken literally
fn id_matcher(id: &str) -> Result<GlobMatcher, globset::Error> {
    let pattern = format!("{}.*", globset::escape(id));
    Ok(Glob::new(&pattern)?.compile_matcher())
}

/// Entries of `folder` whose names match, in name order
fn matching_entries(folder: &Path, matcher: &GlobMatcher) -> io::Result<Vec<PathBuf>> {
    let mut matches = Vec::new();
    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        if matcher.is_match(entry.file_name()) {
            matches.push(entry.path());
        }
    }
    matches.sort();
    Ok(matches)
}

/// Remove entries in order, stopping at the first failure
fn remove_until_failure<F>(entries: &[PathBuf], mut remove: F) -> bool
where
    F: FnMut(&Path) -> io::Result<()>,
{
    for path in entries {
        match remove(path) {
            Ok(()) => tracing::debug!(path = %path.display(), "Deleted file"),
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Couldn't delete file");
                return false;
            }
        }
    }
    true
}

/// Remove a file, or a directory and everything in it
fn force_delete(path: &Path) -> io::Result<()> {
    let metadata = fs::symlink_metadata(path)?;
    if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use remarc_common::config::FolderConfig;

    fn destinations(root: &Path) -> DestinationFolders {
        DestinationFolders::new(root, FolderConfig::default())
    }

    #[test]
    fn test_matcher_requires_extension_separator() {
        let matcher = id_matcher("X1").unwrap();
        assert!(matcher.is_match("X1.jpg"));
        assert!(matcher.is_match("X1.tar.gz"));
        assert!(!matcher.is_match("X10.jpg"));
        assert!(!matcher.is_match("X1"));
        assert!(!matcher.is_match("x1.jpg"));
    }

    #[test]
    fn test_matcher_escapes_metacharacters() {
        let matcher = id_matcher("IMG[1]").unwrap();
        assert!(matcher.is_match("IMG[1].jpg"));
        assert!(!matcher.is_match("IMG1.jpg"));
    }

    #[test]
    fn test_deletes_every_match() {
        let temp_dir = tempfile::tempdir().unwrap();
        let images = temp_dir.path().join("images");
        fs::create_dir_all(&images).unwrap();
        for name in ["X1.jpg", "X1.jpeg", "X2.jpg", "X10.jpg"] {
            fs::write(images.join(name), b"jpeg").unwrap();
        }

        let ok = delete_resource_for_id(&destinations(temp_dir.path()), ResourceKind::Image, "X1")
            .unwrap();

        assert!(ok);
        assert!(!images.join("X1.jpg").exists());
        assert!(!images.join("X1.jpeg").exists());
        assert!(images.join("X2.jpg").exists());
        assert!(images.join("X10.jpg").exists());
    }

    #[test]
    fn test_no_matches_is_success() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(temp_dir.path().join("video")).unwrap();

        let ok = delete_resource_for_id(&destinations(temp_dir.path()), ResourceKind::Video, "NONE")
            .unwrap();
        assert!(ok);
    }

    #[test]
    fn test_missing_folder_reports_failure() {
        let temp_dir = tempfile::tempdir().unwrap();

        let ok = delete_resource_for_id(&destinations(temp_dir.path()), ResourceKind::Audio, "X1")
            .unwrap();
        assert!(!ok);
    }

    #[test]
    fn test_invalid_kind_is_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();

        for kind in [ResourceKind::Properties, ResourceKind::Information] {
            match delete_resource_for_id(&destinations(temp_dir.path()), kind, "X1") {
                Err(IngestError::InvalidResourceKind(k)) => assert_eq!(k, kind),
                other => panic!("Expected InvalidResourceKind, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_first_failure_abandons_remaining_matches() {
        let entries = vec![
            PathBuf::from("/res/images/X1.jpeg"),
            PathBuf::from("/res/images/X1.jpg"),
            PathBuf::from("/res/images/X1.png"),
        ];
        let mut attempted = Vec::new();

        let ok = remove_until_failure(&entries, |path| {
            attempted.push(path.to_path_buf());
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        });

        assert!(!ok);
        assert_eq!(attempted, vec![PathBuf::from("/res/images/X1.jpeg")]);
    }

    #[test]
    fn test_failure_midway_stops_there() {
        let entries = vec![
            PathBuf::from("a/X1.jpeg"),
            PathBuf::from("a/X1.jpg"),
            PathBuf::from("a/X1.png"),
        ];
        let mut attempted = 0;

        let ok = remove_until_failure(&entries, |path| {
            attempted += 1;
            if path.ends_with("X1.jpg") {
                Err(io::Error::new(io::ErrorKind::Other, "busy"))
            } else {
                Ok(())
            }
        });

        assert!(!ok);
        assert_eq!(attempted, 2);
    }

    #[test]
    fn test_matching_directory_is_removed_recursively() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("images").join("X1.bundle");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("inner.jpg"), b"jpeg").unwrap();

        let ok = delete_resource_for_id(&destinations(temp_dir.path()), ResourceKind::Image, "X1")
            .unwrap();

        assert!(ok);
        assert!(!nested.exists());
    }
}
