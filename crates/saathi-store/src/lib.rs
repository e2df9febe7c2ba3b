//! Document store abstraction for the `SugarSaathi` landing service.
//!
//! This crate defines the [`DocumentStore`] trait: an insert-only interface
//! to a schema-less document database addressed by collection name. It knows
//! nothing about waitlists or emails. The waitlist submitter in
//! `saathi-core` builds a [`Document`] and hands it to a store.
//!
//! Two implementations are provided:
//!
//! - [`FirestoreStore`]: production default, talks to the Firestore REST API (feature `firestore-backend`)
//! - [`MemoryStore`]: in-memory, for development and tests

mod document;
mod error;
#[cfg(feature = "firestore-backend")]
mod firestore;
mod memory;

pub use document::{Document, DocumentId, FieldValue};
pub use error::StoreError;
#[cfg(feature = "firestore-backend")]
pub use firestore::{FirestoreConfig, FirestoreStore};
pub use memory::MemoryStore;

/// A pluggable document store.
///
/// Collections are named by plain strings (e.g. `waitlist`). Documents are
/// schema-less field maps. The store only ever receives inserts from this
/// workspace; reading is left to whoever owns the database.
///
/// Implementations must be safe to share across async tasks (`Send + Sync`).
/// Concurrent inserts are independent: no ordering is promised between them.
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync + 'static {
    /// Insert a new document into `collection` and return its identifier.
    ///
    /// Every call creates a new document, even if an identical one already
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Transport`] if the store cannot be reached,
    /// [`StoreError::Rejected`] if it refuses the write, and
    /// [`StoreError::Decode`] if its reply cannot be understood.
    async fn insert(&self, collection: &str, document: Document)
    -> Result<DocumentId, StoreError>;

    /// Short backend name for logs (`memory`, `firestore`).
    fn name(&self) -> &'static str;
}
