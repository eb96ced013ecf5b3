//! Document persistence for remarc-ingest
//!
//! The pipeline writes through the [`DocumentSink`] trait so it can run
//! against SQLite or an in-memory recorder.

pub mod documents;
pub mod memory;

pub use documents::{DocumentSink, SqliteDocumentStore};
pub use memory::MemoryDocumentSink;
