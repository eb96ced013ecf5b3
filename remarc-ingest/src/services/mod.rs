//! Ingestion services
//!
//! Leaf-first: classifier → scanner/grouper → properties loader →
//! assembler → sink/remover → upload processor.

pub mod classifier;
pub mod document_assembler;
pub mod item_grouper;
pub mod properties_loader;
pub mod resource_remover;
pub mod resource_sink;
pub mod upload_processor;
pub mod upload_scanner;

pub use upload_processor::UploadProcessor;
