//! In-memory document sink

use crate::db::DocumentSink;
use crate::error::StoreError;
use crate::models::{AssembledDocument, Collection};
use async_trait::async_trait;
use std::sync::Mutex;

/// Records inserted documents in memory
#[derive(Debug, Default)]
pub struct MemoryDocumentSink {
    documents: Mutex<Vec<(Collection, AssembledDocument)>>,
    reject_inserts: bool,
}

impl MemoryDocumentSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink that rejects every insert
    pub fn rejecting() -> Self {
        Self {
            reject_inserts: true,
            ..Self::default()
        }
    }

    /// All inserted documents, in insertion order
    pub fn documents(&self) -> Vec<(Collection, AssembledDocument)> {
        self.documents
            .lock()
            .map(|docs| docs.clone())
            .unwrap_or_default()
    }

    /// Documents inserted into one collection
    pub fn documents_in(&self, collection: Collection) -> Vec<AssembledDocument> {
        self.documents()
            .into_iter()
            .filter(|(c, _)| *c == collection)
            .map(|(_, doc)| doc)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.documents.lock().map(|docs| docs.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl DocumentSink for MemoryDocumentSink {
    async fn insert(
        &self,
        collection: Collection,
        document: &AssembledDocument,
    ) -> Result<(), StoreError> {
        if self.reject_inserts {
            return Err(StoreError::Rejected(format!(
                "{} insert of {} refused",
                collection, document.id
            )));
        }

        self.documents
            .lock()
            .map_err(|_| StoreError::Rejected("document sink lock poisoned".to_string()))?
            .push((collection, document.clone()));
        Ok(())
    }
}
