//! In-process document stores for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::store::{DocumentStore, StoreError};
use crate::survey::collector::ResponseSet;

#[derive(Default)]
pub struct MemoryStore {
    documents: Mutex<HashMap<(String, String), ResponseSet>>,
}

impl MemoryStore {
    pub fn get(&self, collection: &str, document_id: &str) -> Option<ResponseSet> {
        self.documents
            .lock()
            .unwrap()
            .get(&(collection.to_string(), document_id.to_string()))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.documents.lock().unwrap().len()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn set_document(
        &self,
        collection: &str,
        document_id: &str,
        data: &ResponseSet,
    ) -> Result<(), StoreError> {
        self.documents.lock().unwrap().insert(
            (collection.to_string(), document_id.to_string()),
            data.clone(),
        );
        Ok(())
    }
}

/// Rejects every write, as an unreachable backend would.
pub struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    async fn set_document(
        &self,
        _collection: &str,
        _document_id: &str,
        _data: &ResponseSet,
    ) -> Result<(), StoreError> {
        Err(StoreError::Write {
            status: 503,
            message: "backend unavailable".to_string(),
        })
    }
}
