//! Waitlist sign-up routes.
//!
//! `POST /waitlist` takes the HTML form and answers with the re-rendered
//! page; `POST /v1/waitlist` takes JSON. Both run the same submitter and
//! both stop every failure here: the visitor sees a message, the log gets
//! the detail.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::post;
use axum::{Form, Json, Router};
use serde::{Deserialize, Serialize};

use saathi_core::error::WaitlistError;
use saathi_core::view::{LandingView, WaitlistForm};

use crate::error::AppError;
use crate::routes::landing::render_page;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/waitlist", post(submit_form))
        .route("/v1/waitlist", post(submit_json))
}

/// Body of both endpoints. A missing field is treated as an empty address.
#[derive(Debug, Deserialize)]
struct WaitlistRequest {
    #[serde(default)]
    email: String,
}

#[derive(Debug, Serialize)]
struct JoinedResponse {
    status: &'static str,
    id: String,
}

async fn submit_form(
    State(state): State<Arc<AppState>>,
    Form(req): Form<WaitlistRequest>,
) -> (StatusCode, Html<String>) {
    let outcome = state.submitter.submit(&req.email).await;

    let status = match &outcome {
        Ok(_) => StatusCode::OK,
        Err(WaitlistError::InvalidEmail) => StatusCode::BAD_REQUEST,
        Err(WaitlistError::StoreWrite(e)) => {
            tracing::error!(error = %e, "failed to save waitlist entry");
            StatusCode::BAD_GATEWAY
        }
    };

    let view = LandingView {
        form: WaitlistForm::after_submit(&req.email, &outcome),
        ..LandingView::default()
    };

    (status, Html(render_page(&view)))
}

async fn submit_json(
    State(state): State<Arc<AppState>>,
    Json(req): Json<WaitlistRequest>,
) -> Result<(StatusCode, Json<JoinedResponse>), AppError> {
    let receipt = state.submitter.submit(&req.email).await?;

    Ok((
        StatusCode::CREATED,
        Json(JoinedResponse {
            status: "joined",
            id: receipt.id.to_string(),
        }),
    ))
}
