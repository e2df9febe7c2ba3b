//! Error types for `saathi-core`.
//!
//! Only two things can go wrong when joining the waitlist: the input is not
//! an email address, or the store write fails. Store errors keep their full
//! detail for logs; the page only ever shows a generic message for them.

use saathi_store::StoreError;

/// Errors from a waitlist submission.
#[derive(Debug, thiserror::Error)]
pub enum WaitlistError {
    /// The submitted text does not look like an email address. No store
    /// call was made.
    #[error("invalid email address")]
    InvalidEmail,

    /// The store refused or failed the insert. Not retried.
    #[error("failed to save waitlist entry: {0}")]
    StoreWrite(#[from] StoreError),
}

impl WaitlistError {
    /// Whether this error was caused by the user's input rather than the
    /// store.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidEmail)
    }
}
