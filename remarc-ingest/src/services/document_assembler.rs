//! Document assembly for item groups
//!
//! Every file in a group contributes one content entry, keyed by the file's
//! own kind (which may differ from the group's dominant kind):
//! - Image → `imageUrl`
//! - Information → `metadata`, value is the sidecar's full text
//! - anything else → `<extension>ContentUrl`
//!
//! URL values are `prefix + file name`, where the prefix is chosen by the
//! group's dominant kind. Later files overwrite earlier ones on key clashes.

use crate::config::content_url_prefix;
use crate::models::{AssembledDocument, DirectoryAttributes, ItemGroup, ResourceKind};
use crate::services::classifier::{classify_extension, file_name_of, split_file_name};
use remarc_common::config::UrlConfig;
use remarc_common::EnvLookup;
use std::path::Path;
use std::sync::Arc;

pub const IMAGE_URL_KEY: &str = "imageUrl";
pub const METADATA_KEY: &str = "metadata";

/// Content key for a file of `kind` with `extension`
pub fn content_key(kind: ResourceKind, extension: &str) -> String {
    match kind {
        ResourceKind::Image => IMAGE_URL_KEY.to_string(),
        ResourceKind::Information => METADATA_KEY.to_string(),
        _ => format!("{}ContentUrl", extension),
    }
}

/// Builds documents from item groups
pub struct DocumentAssembler {
    urls: UrlConfig,
    env: Arc<dyn EnvLookup>,
}

impl DocumentAssembler {
    pub fn new(urls: UrlConfig, env: Arc<dyn EnvLookup>) -> Self {
        Self { urls, env }
    }

    /// Assemble the document for one group
    pub fn assemble(&self, group: &ItemGroup, attributes: &DirectoryAttributes) -> AssembledDocument {
        let mut document = AssembledDocument::new(group.id(), attributes);
        let prefix = content_url_prefix(&self.urls, self.env.as_ref(), group.dominant_kind());

        for file in group.files() {
            let file_name = file_name_of(file);
            let (_, extension) = split_file_name(&file_name);

            let Some(kind) = classify_extension(extension) else {
                tracing::warn!(file = %file.display(), "Unclassifiable file in group, skipping");
                continue;
            };

            tracing::debug!(id = group.id(), file = %file_name, %kind, "Processing group file");

            let key = content_key(kind, extension);
            let value = if kind == ResourceKind::Information {
                read_metadata(file)
            } else {
                format!("{}{}", prefix, file_name)
            };

            if document.set_content(key.as_str(), value).is_some() {
                tracing::debug!(id = group.id(), key = %key, "Content key overwritten by later file");
            }
        }

        document
    }
}

/// Full text of a metadata sidecar; empty on read failure
///
/// Invalid UTF-8 sequences are replaced, not rejected.
fn read_metadata(path: &Path) -> String {
    match std::fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            tracing::error!(file = %path.display(), error = %e, "Unable to read metadata");
            String::new()
        }
    }
}
