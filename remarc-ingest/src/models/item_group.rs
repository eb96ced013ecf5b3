//! Files sharing a base identifier within one directory

use crate::models::ResourceKind;
use std::path::PathBuf;

/// One logical content item
///
/// The dominant kind is the highest-ranked kind among the group's files and
/// never decreases as files are added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemGroup {
    id: String,
    dominant_kind: ResourceKind,
    files: Vec<PathBuf>,
}

impl ItemGroup {
    /// Start a group from its first file
    pub fn new(id: impl Into<String>, file: PathBuf, kind: ResourceKind) -> Self {
        Self {
            id: id.into(),
            dominant_kind: kind,
            files: vec![file],
        }
    }

    /// Append a file, raising the dominant kind if `kind` outranks it
    pub fn add_file(&mut self, file: PathBuf, kind: ResourceKind) {
        self.files.push(file);
        self.dominant_kind = self.dominant_kind.max(kind);
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn dominant_kind(&self) -> ResourceKind {
        self.dominant_kind
    }

    /// Constituent files in scan order
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}
