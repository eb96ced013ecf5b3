//! Extension to resource kind classification

use crate::models::ResourceKind;
use std::path::Path;

/// Classify a file extension (case-insensitive)
///
/// Returns `None` for anything outside the known set; callers skip those
/// files rather than treating them as errors.
pub fn classify_extension(extension: &str) -> Option<ResourceKind> {
    let ext = extension.to_ascii_lowercase();
    match ext.as_str() {
        "properties" => Some(ResourceKind::Properties),
        "jpg" | "jpeg" => Some(ResourceKind::Image),
        "mp3" | "ogg" => Some(ResourceKind::Audio),
        "mp4" | "ogv" => Some(ResourceKind::Video),
        "metadata" => Some(ResourceKind::Information),
        _ => None,
    }
}

/// Split a file name into `(base name, extension)` at the last `.`
///
/// A name without a `.` has an empty extension.
pub fn split_file_name(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(idx) => (&file_name[..idx], &file_name[idx + 1..]),
        None => (file_name, ""),
    }
}

/// Final component of `path` as text (lossy); empty if there is none
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Classify a file by the extension of its name
pub fn classify_file_name(file_name: &str) -> Option<ResourceKind> {
    classify_extension(split_file_name(file_name).1)
}
