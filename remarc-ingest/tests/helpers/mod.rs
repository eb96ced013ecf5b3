//! Test Helper Utilities
//!
//! Upload tree fixtures and processor construction for remarc-ingest tests

#![allow(dead_code)]

use remarc_common::MapEnv;
use remarc_ingest::db::MemoryDocumentSink;
use remarc_ingest::{IngestSettings, UploadProcessor};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Upload and resources roots inside one temporary directory
///
/// The TempDir must be kept alive for the duration of the test.
pub struct Workspace {
    _temp_dir: TempDir,
    pub upload: PathBuf,
    pub resources: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let upload = temp_dir.path().join("upload");
        let resources = temp_dir.path().join("resources");
        fs::create_dir_all(&upload).unwrap();

        Self {
            _temp_dir: temp_dir,
            upload,
            resources,
        }
    }

    /// Directory under the upload root, created on demand
    pub fn upload_dir(&self, relative: &str) -> PathBuf {
        let dir = if relative.is_empty() {
            self.upload.clone()
        } else {
            self.upload.join(relative)
        };
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Path of a relocated resource
    pub fn resource(&self, folder: &str, name: &str) -> PathBuf {
        self.resources.join(folder).join(name)
    }

    /// Names in a resources folder, sorted; empty if the folder is absent
    pub fn resource_names(&self, folder: &str) -> Vec<String> {
        let Ok(entries) = fs::read_dir(self.resources.join(folder)) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    pub fn upload_is_empty(&self) -> bool {
        fs::read_dir(&self.upload).unwrap().next().is_none()
    }
}

/// Write `upload.properties` with theme and decade into `dir`
pub fn write_properties(dir: &Path, theme: &str, decade: &str) -> PathBuf {
    let path = dir.join("upload.properties");
    fs::write(&path, format!("# upload batch\ntheme={}\ndecade={}\n", theme, decade)).unwrap();
    path
}

/// Write a content file whose bytes are its own name
pub fn write_file(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, name.as_bytes()).unwrap();
    path
}

pub fn write_text(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    path
}

/// Processor over an in-memory sink with the given environment
pub fn memory_processor(env: MapEnv) -> (UploadProcessor, Arc<MemoryDocumentSink>) {
    let store = Arc::new(MemoryDocumentSink::new());
    let processor = UploadProcessor::new(IngestSettings::default(), store.clone(), Arc::new(env));
    (processor, store)
}
