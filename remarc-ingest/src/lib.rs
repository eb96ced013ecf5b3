//! remarc-ingest library interface
//!
//! Ingests an uploaded directory tree of media files and sidecars: files are
//! classified by extension, grouped by base name, assembled into one
//! document per group, written to the collection for the group's dominant
//! kind, and copied into that kind's storage folder.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;

pub use crate::config::IngestSettings;
pub use crate::error::{IngestError, IngestResult};
pub use crate::models::{AssembledDocument, Collection, IngestReport, ResourceKind};
pub use crate::services::resource_remover::delete_resource_for_id;
pub use crate::services::UploadProcessor;
