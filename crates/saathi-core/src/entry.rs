//! The waitlist entry record.

use chrono::{DateTime, Utc};
use serde::Serialize;

use saathi_store::Document;

use crate::email::Email;

/// Collection every waitlist entry is written to.
pub const WAITLIST_COLLECTION: &str = "waitlist";

/// Origin tag stored on entries captured by this site.
pub const LANDING_PAGE_SOURCE: &str = "landing-page";

/// A single captured email submission.
///
/// Holding an [`Email`] guarantees the address was validated and
/// normalized before the entry could be built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaitlistEntry {
    pub email: Email,
    pub timestamp: DateTime<Utc>,
    pub source: &'static str,
}

impl WaitlistEntry {
    /// Build an entry stamped with `timestamp` and the landing page source.
    #[must_use]
    pub fn new(email: Email, timestamp: DateTime<Utc>) -> Self {
        Self {
            email,
            timestamp,
            source: LANDING_PAGE_SOURCE,
        }
    }

    /// The document written to the store.
    #[must_use]
    pub fn to_document(&self) -> Document {
        Document::new()
            .with_string("email", self.email.as_str())
            .with_timestamp("timestamp", self.timestamp)
            .with_string("source", self.source)
    }
}
