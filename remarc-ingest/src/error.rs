//! Error types for remarc-ingest
//!
//! Three severities:
//! - Directory-level ([`PropertiesError`], [`ScanError`]): the directory's
//!   groups are discarded, siblings and children continue.
//! - File-level (metadata read, copy, delete): logged and skipped, never
//!   surfaced as an error value.
//! - Caller bugs ([`IngestError::InvalidResourceKind`]).

use crate::models::ResourceKind;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain directory attributes
#[derive(Debug, Error)]
pub enum PropertiesError {
    /// Directory contained no properties file
    #[error("Directory has no properties file")]
    Missing,

    /// Properties file could not be read
    #[error("Unable to read properties file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Properties file could not be parsed
    #[error("Malformed properties file {path} (line {line}): {reason}")]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// Properties file has neither theme nor decade
    #[error("Properties file {path} contains neither theme nor decade")]
    Insufficient { path: PathBuf },
}

/// Upload directory could not be listed
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Unable to list directory {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Document store failure
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Document serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Insert rejected: {0}")]
    Rejected(String),
}

/// Ingestion error type
#[derive(Debug, Error)]
pub enum IngestError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Properties(#[from] PropertiesError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// Deletion requested for a kind that has no content folder
    #[error("Trying to delete content for invalid type {0}")]
    InvalidResourceKind(ResourceKind),

    /// Identifier could not be turned into a wildcard pattern
    #[error("Invalid resource pattern: {0}")]
    Pattern(#[from] globset::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// remarc-common error
    #[error("Common error: {0}")]
    Common(#[from] remarc_common::Error),
}

/// Result type for ingestion operations
pub type IngestResult<T> = Result<T, IngestError>;
