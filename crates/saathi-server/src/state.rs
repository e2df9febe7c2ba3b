//! Shared application state for the landing server.
//!
//! A single [`AppState`] is constructed at startup and shared across all
//! Axum handlers via `Arc`. The only moving part is the waitlist submitter;
//! the page content is static.

use std::sync::Arc;

use saathi_core::waitlist::WaitlistSubmitter;
use saathi_store::DocumentStore;

/// Shared application state passed to all HTTP handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Validates and saves waitlist sign-ups.
    pub submitter: WaitlistSubmitter,
    /// Backend name, reported by `/health`.
    pub store_name: &'static str,
}

impl AppState {
    /// State writing to `store`.
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        let store_name = store.name();
        Self {
            submitter: WaitlistSubmitter::new(store),
            store_name,
        }
    }
}
