//! Destination folder lookup per content kind

use crate::models::ResourceKind;
use remarc_common::config::FolderConfig;
use std::path::PathBuf;

/// Type-specific storage folders under a resources root
#[derive(Debug, Clone)]
pub struct DestinationFolders {
    resources_root: PathBuf,
    folders: FolderConfig,
}

impl DestinationFolders {
    pub fn new(resources_root: impl Into<PathBuf>, folders: FolderConfig) -> Self {
        Self {
            resources_root: resources_root.into(),
            folders,
        }
    }

    /// Folder for a content kind; `None` for Properties and Information
    pub fn for_kind(&self, kind: ResourceKind) -> Option<PathBuf> {
        let name = match kind {
            ResourceKind::Image => &self.folders.image,
            ResourceKind::Audio => &self.folders.audio,
            ResourceKind::Video => &self.folders.video,
            ResourceKind::Properties | ResourceKind::Information => return None,
        };
        Some(self.resources_root.join(name))
    }
}
