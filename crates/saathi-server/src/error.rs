//! HTTP error types for the landing server.
//!
//! Maps waitlist errors into JSON responses for `/v1/*`. Every error
//! produces a body with a machine-readable `error` field and a
//! human-readable `message`. Store failure detail is logged here and never
//! sent to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use saathi_core::error::WaitlistError;

/// Application-level error returned from JSON handlers.
#[derive(Debug)]
pub enum AppError {
    /// Client sent invalid input.
    BadRequest(String),
    /// The document store failed; message is already generic.
    Upstream(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            Self::Upstream(msg) => (StatusCode::BAD_GATEWAY, "store_unavailable", msg),
        };

        let body = ErrorBody {
            error: error_type,
            message,
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<WaitlistError> for AppError {
    fn from(err: WaitlistError) -> Self {
        match err {
            WaitlistError::InvalidEmail => {
                Self::BadRequest("please enter a valid email address".to_owned())
            }
            WaitlistError::StoreWrite(ref inner) => {
                tracing::error!(error = %inner, "failed to save waitlist entry");
                Self::Upstream("error saving email, please try again".to_owned())
            }
        }
    }
}
