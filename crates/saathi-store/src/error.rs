//! Store error types.
//!
//! Every error variant carries enough context to diagnose the problem
//! without a debugger. Credentials never appear in error text.

/// Errors that can occur while writing to a document store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store is misconfigured (missing project id, bad base URL, ...).
    #[error("invalid store configuration: {reason}")]
    Config { reason: String },

    /// The store could not be reached or the request did not complete.
    #[error("failed to reach store while writing to '{collection}': {reason}")]
    Transport { collection: String, reason: String },

    /// The store answered but refused the write.
    #[error("store rejected write to '{collection}' with status {status}: {message}")]
    Rejected {
        collection: String,
        status: u16,
        message: String,
    },

    /// The store reply could not be decoded.
    #[error("failed to decode store reply for '{collection}': {reason}")]
    Decode { collection: String, reason: String },
}
