//! Waitlist submission.
//!
//! [`WaitlistSubmitter::submit`] is the whole capture flow: validate, build
//! an entry, insert it once. There is no retry and no idempotency key, so a
//! user who resubmits after a transient failure may end up on the list
//! twice. Overlapping submissions are independent; nothing serializes them.

use std::sync::Arc;

use chrono::Utc;

use saathi_store::{DocumentId, DocumentStore};

use crate::email::Email;
use crate::entry::{WAITLIST_COLLECTION, WaitlistEntry};
use crate::error::WaitlistError;

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitReceipt {
    /// Identifier the store gave the new document.
    pub id: DocumentId,
    /// The entry as it was written.
    pub entry: WaitlistEntry,
}

/// Validates email input and writes waitlist entries to a document store.
#[derive(Clone)]
pub struct WaitlistSubmitter {
    store: Arc<dyn DocumentStore>,
    collection: String,
}

impl std::fmt::Debug for WaitlistSubmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WaitlistSubmitter")
            .field("store", &self.store.name())
            .field("collection", &self.collection)
            .finish()
    }
}

impl WaitlistSubmitter {
    /// Create a submitter that writes to the `waitlist` collection.
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            collection: WAITLIST_COLLECTION.to_owned(),
        }
    }

    /// Collection entries are written to.
    #[must_use]
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Validate `raw`, then insert a new entry for it.
    ///
    /// # Errors
    ///
    /// Returns [`WaitlistError::InvalidEmail`] without touching the store if
    /// `raw` is not an email address, or [`WaitlistError::StoreWrite`] if the
    /// insert fails.
    pub async fn submit(&self, raw: &str) -> Result<SubmitReceipt, WaitlistError> {
        let email = Email::parse(raw)?;
        let entry = WaitlistEntry::new(email, Utc::now());

        let id = self
            .store
            .insert(&self.collection, entry.to_document())
            .await?;

        tracing::info!(
            id = %id,
            store = self.store.name(),
            email_domain = entry.email.domain(),
            "waitlist entry saved"
        );

        Ok(SubmitReceipt { id, entry })
    }
}
