//! In-memory document store for development and testing.
//!
//! Documents live in a `BTreeMap` of collections behind a `RwLock`. Nothing
//! is persistent; all data is lost when the process exits. Use this when
//! running the landing page locally without Firestore credentials, and in
//! tests that need a real store without a network.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{Document, DocumentId, DocumentStore, StoreError};

/// An in-memory document store.
///
/// Thread-safe and async-compatible. Clones share the same data, so a test
/// can keep a handle and inspect what the code under test inserted.
///
/// # Examples
///
/// ```
/// # use saathi_store::{Document, DocumentStore, MemoryStore};
/// # #[tokio::main]
/// # async fn main() {
/// let store = MemoryStore::new();
/// let doc = Document::new().with_string("email", "a@b.co");
/// store.insert("waitlist", doc).await.unwrap();
/// assert_eq!(store.documents("waitlist").await.len(), 1);
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    collections: Arc<RwLock<BTreeMap<String, Vec<(DocumentId, Document)>>>>,
}

impl MemoryStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every document in `collection`, in insertion order.
    pub async fn documents(&self, collection: &str) -> Vec<(DocumentId, Document)> {
        let data = self.collections.read().await;
        data.get(collection).cloned().unwrap_or_default()
    }

    /// Total number of documents across all collections.
    pub async fn len(&self) -> usize {
        let data = self.collections.read().await;
        data.values().map(Vec::len).sum()
    }

    /// Whether no document has been inserted yet.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait::async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<DocumentId, StoreError> {
        if collection.is_empty() {
            return Err(StoreError::Config {
                reason: "collection name must not be empty".to_owned(),
            });
        }

        let id = DocumentId::new(uuid::Uuid::new_v4().simple().to_string());
        let mut data = self.collections.write().await;
        data.entry(collection.to_owned())
            .or_default()
            .push((id.clone(), document));
        Ok(id)
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::FieldValue;

    fn entry(email: &str) -> Document {
        Document::new().with_string("email", email)
    }

    #[tokio::test]
    async fn insert_then_documents_roundtrip() {
        let store = MemoryStore::new();
        store.insert("waitlist", entry("a@b.co")).await.unwrap();
        let docs = store.documents("waitlist").await;
        assert_eq!(docs.len(), 1);
        assert_eq!(
            docs[0].1.get("email").and_then(FieldValue::as_str),
            Some("a@b.co")
        );
    }

    #[tokio::test]
    async fn identical_documents_are_both_kept() {
        let store = MemoryStore::new();
        let a = store.insert("waitlist", entry("a@b.co")).await.unwrap();
        let b = store.insert("waitlist", entry("a@b.co")).await.unwrap();
        assert_ne!(a, b);
        assert_eq!(store.documents("waitlist").await.len(), 2);
    }

    #[tokio::test]
    async fn collections_are_separate() {
        let store = MemoryStore::new();
        store.insert("waitlist", entry("a@b.co")).await.unwrap();
        store.insert("other", entry("c@d.co")).await.unwrap();
        assert_eq!(store.documents("waitlist").await.len(), 1);
        assert_eq!(store.documents("other").await.len(), 1);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn unknown_collection_is_empty() {
        let store = MemoryStore::new();
        assert!(store.documents("nope").await.is_empty());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn empty_collection_name_rejected() {
        let store = MemoryStore::new();
        let err = store.insert("", entry("a@b.co")).await.unwrap_err();
        assert!(matches!(err, StoreError::Config { .. }));
    }

    #[tokio::test]
    async fn clone_shares_state() {
        let store = MemoryStore::new();
        let clone = store.clone();
        store.insert("waitlist", entry("a@b.co")).await.unwrap();
        assert_eq!(clone.documents("waitlist").await.len(), 1);
    }

    #[tokio::test]
    async fn concurrent_inserts_all_land() {
        let store = MemoryStore::new();
        let mut handles = Vec::new();
        for i in 0..16 {
            let s = store.clone();
            handles.push(tokio::spawn(async move {
                s.insert("waitlist", entry(&format!("user{i}@b.co"))).await
            }));
        }
        for h in handles {
            h.await.unwrap().unwrap();
        }
        assert_eq!(store.documents("waitlist").await.len(), 16);
    }
}
