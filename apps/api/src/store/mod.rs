//! Response Store: assigns an identifier to a submission and writes it out.
//!
//! One blind document write per submission. No read-back, update, or query
//! surface; the identifier is the only key.

pub mod firestore;
#[cfg(test)]
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::survey::collector::ResponseSet;

pub const RESPONSES_COLLECTION: &str = "responses";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid service account credentials: {0}")]
    Credentials(String),

    #[error("failed to sign token request: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    #[error("token exchange failed (status {status}): {message}")]
    TokenExchange { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("document write failed (status {status}): {message}")]
    Write { status: u16, message: String },
}

/// One persisted submission.
#[derive(Debug, Clone)]
pub struct StoredRecord {
    pub id: Uuid,
    pub responses: ResponseSet,
}

/// A key-value document backend. `set_document` has full-replace semantics.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn set_document(
        &self,
        collection: &str,
        document_id: &str,
        data: &ResponseSet,
    ) -> Result<(), StoreError>;
}

#[derive(Clone)]
pub struct ResponseStore {
    backend: Arc<dyn DocumentStore>,
}

impl ResponseStore {
    pub fn new(backend: Arc<dyn DocumentStore>) -> Self {
        Self { backend }
    }

    /// Stores `responses` under a fresh random v4 identifier. Identical
    /// submissions get distinct identifiers.
    pub async fn persist(&self, responses: ResponseSet) -> Result<Uuid, StoreError> {
        let record = StoredRecord {
            id: Uuid::new_v4(),
            responses,
        };

        self.backend
            .set_document(
                RESPONSES_COLLECTION,
                &record.id.to_string(),
                &record.responses,
            )
            .await?;

        info!("Stored survey responses under {}", record.id);
        Ok(record.id)
    }
}

#[cfg(test)]
mod tests {
    use super::memory::{FailingStore, MemoryStore};
    use super::*;
    use std::collections::HashSet;

    fn abc() -> ResponseSet {
        [("q1", "A"), ("q2", "B"), ("q3", "C")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_persist_round_trips_exact_responses() {
        let backend = Arc::new(MemoryStore::default());
        let store = ResponseStore::new(backend.clone());

        let id = store.persist(abc()).await.unwrap();

        let stored = backend.get(RESPONSES_COLLECTION, &id.to_string()).unwrap();
        assert_eq!(stored, abc());
        assert_eq!(backend.len(), 1);
    }

    #[tokio::test]
    async fn test_identifier_is_uuid_v4() {
        let store = ResponseStore::new(Arc::new(MemoryStore::default()));
        let id = store.persist(abc()).await.unwrap();
        assert_eq!(id.get_version(), Some(uuid::Version::Random));
        assert_eq!(id.to_string().len(), 36);
    }

    #[tokio::test]
    async fn test_identical_submissions_get_distinct_ids() {
        let backend = Arc::new(MemoryStore::default());
        let store = ResponseStore::new(backend.clone());

        let first = store.persist(abc()).await.unwrap();
        let second = store.persist(abc()).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(backend.len(), 2);
    }

    #[tokio::test]
    async fn test_ten_thousand_ids_never_collide() {
        let backend = Arc::new(MemoryStore::default());
        let store = ResponseStore::new(backend.clone());

        let mut ids = HashSet::new();
        for _ in 0..10_000 {
            assert!(ids.insert(store.persist(abc()).await.unwrap()));
        }
        assert_eq!(backend.len(), 10_000);
    }

    #[tokio::test]
    async fn test_backend_failure_propagates() {
        let store = ResponseStore::new(Arc::new(FailingStore));
        let err = store.persist(abc()).await.unwrap_err();
        assert!(matches!(err, StoreError::Write { status: 503, .. }));
    }
}
