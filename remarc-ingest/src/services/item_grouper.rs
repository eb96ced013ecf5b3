//! Groups sibling files by shared base identifier

use crate::models::{ItemGroup, ResourceKind};
use std::collections::HashMap;
use std::path::PathBuf;

/// Per-directory grouping state
///
/// Groups come out in the order their first file was added.
#[derive(Debug, Default)]
pub struct ItemGrouper {
    groups: Vec<ItemGroup>,
    index: HashMap<String, usize>,
}

impl ItemGrouper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a classified file to the group for `id`
    pub fn add(&mut self, id: &str, file: PathBuf, kind: ResourceKind) {
        match self.index.get(id) {
            Some(&idx) => self.groups[idx].add_file(file, kind),
            None => {
                self.index.insert(id.to_string(), self.groups.len());
                self.groups.push(ItemGroup::new(id, file, kind));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn into_groups(self) -> Vec<ItemGroup> {
        self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_group_by_identifier() {
        let mut grouper = ItemGrouper::new();
        grouper.add("IMG1", PathBuf::from("IMG1.jpg"), ResourceKind::Image);
        grouper.add("CLIP1", PathBuf::from("CLIP1.mp4"), ResourceKind::Video);
        grouper.add("IMG1", PathBuf::from("IMG1.metadata"), ResourceKind::Information);
        grouper.add("CLIP1", PathBuf::from("CLIP1.jpg"), ResourceKind::Image);

        assert_eq!(grouper.len(), 2);
        let groups = grouper.into_groups();

        assert_eq!(groups[0].id(), "IMG1");
        assert_eq!(groups[0].dominant_kind(), ResourceKind::Image);
        assert_eq!(groups[0].files().len(), 2);

        assert_eq!(groups[1].id(), "CLIP1");
        assert_eq!(groups[1].dominant_kind(), ResourceKind::Video);
        assert_eq!(
            groups[1].files(),
            &[PathBuf::from("CLIP1.mp4"), PathBuf::from("CLIP1.jpg")]
        );
    }

    #[test]
    fn test_metadata_only_group_stays_information() {
        let mut grouper = ItemGrouper::new();
        grouper.add("NOTE", PathBuf::from("NOTE.metadata"), ResourceKind::Information);

        let groups = grouper.into_groups();
        assert_eq!(groups[0].dominant_kind(), ResourceKind::Information);
        assert!(groups[0].dominant_kind().collection().is_none());
    }

    #[test]
    fn test_identifiers_are_case_sensitive() {
        let mut grouper = ItemGrouper::new();
        grouper.add("img1", PathBuf::from("img1.jpg"), ResourceKind::Image);
        grouper.add("IMG1", PathBuf::from("IMG1.jpg"), ResourceKind::Image);
        assert_eq!(grouper.len(), 2);
    }
}
