//! Integration tests for the landing server routes.
//!
//! These drive the full router (middleware included) in-process with
//! `tower::ServiceExt::oneshot`. No socket is opened and no Firestore
//! project is needed: the store is either the in-memory backend or a stub
//! that fails every write.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use saathi_server::routes::build_router;
use saathi_server::state::AppState;
use saathi_store::{Document, DocumentId, DocumentStore, FieldValue, MemoryStore, StoreError};

/// A store that refuses every write and counts attempts.
#[derive(Default)]
struct BrokenStore {
    attempts: AtomicUsize,
}

#[async_trait::async_trait]
impl DocumentStore for BrokenStore {
    async fn insert(&self, collection: &str, _document: Document) -> Result<DocumentId, StoreError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Rejected {
            collection: collection.to_owned(),
            status: 403,
            message: "Missing or insufficient permissions.".to_owned(),
        })
    }

    fn name(&self) -> &'static str {
        "broken"
    }
}

fn app_with(store: Arc<dyn DocumentStore>) -> Router {
    build_router(Arc::new(AppState::new(store)), Path::new("assets"))
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, String) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn form_post(email: &str) -> Request<Body> {
    let encoded: String = email
        .chars()
        .map(|c| match c {
            '@' => "%40".to_owned(),
            ' ' => "+".to_owned(),
            '+' => "%2B".to_owned(),
            other => other.to_string(),
        })
        .collect();
    Request::post("/waitlist")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(format!("email={encoded}")))
        .unwrap()
}

fn json_post(body: &str) -> Request<Body> {
    Request::post("/v1/waitlist")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

// ── Landing page ─────────────────────────────────────────────────────

#[tokio::test]
async fn landing_page_renders_all_sections() {
    let app = app_with(Arc::new(MemoryStore::new()));
    let (status, body) = send(app, Request::get("/").body(Body::empty()).unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    for marker in [
        "Track less, live more.",
        "id=\"glimpse\"",
        "id=\"why-sugarsaathi\"",
        "id=\"features\"",
        "id=\"waitlist\"",
        "id=\"learn-about-us\"",
        "Note from Founder",
        "id=\"footer\"",
        "FREE 3 MONTH PLAN FOR FIRST 100 USERS",
    ] {
        assert!(body.contains(marker), "page should contain {marker}");
    }
}

#[tokio::test]
async fn landing_page_sets_security_headers() {
    let app = app_with(Arc::new(MemoryStore::new()));
    let resp = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    assert_eq!(resp.headers()[header::X_FRAME_OPTIONS], "DENY");
}

#[tokio::test]
async fn query_selects_tab_and_faq() {
    let app = app_with(Arc::new(MemoryStore::new()));
    let (status, body) = send(
        app,
        Request::get("/?feature=1&faq=4").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/assets/voice-phone.png"));
    assert!(body.contains("Upload photos or PDFs anytime."));
    assert_eq!(body.matches("aria-expanded=\"true\"").count(), 1);
}

#[tokio::test]
async fn garbage_query_falls_back_to_defaults() {
    let app = app_with(Arc::new(MemoryStore::new()));
    let (status, body) = send(
        app,
        Request::get("/?feature=abc&faq=-1").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/assets/language-phone.png"));
    assert!(!body.contains("aria-expanded=\"true\""));
}

// ── Waitlist form ────────────────────────────────────────────────────

#[tokio::test]
async fn form_submit_stores_normalized_entry_and_clears_input() {
    let store = MemoryStore::new();
    let app = app_with(Arc::new(store.clone()));
    let started = chrono::Utc::now();

    let (status, body) = send(app, form_post("User@Example.com")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Thank you for joining!"));
    assert!(body.contains("value=\"\""));

    let docs = store.documents("waitlist").await;
    assert_eq!(docs.len(), 1);
    let doc = &docs[0].1;
    assert_eq!(
        doc.get("email").and_then(FieldValue::as_str),
        Some("user@example.com")
    );
    assert_eq!(
        doc.get("source").and_then(FieldValue::as_str),
        Some("landing-page")
    );
    let ts = doc
        .get("timestamp")
        .and_then(FieldValue::as_timestamp)
        .expect("timestamp field");
    assert!(ts >= started);
}

#[tokio::test]
async fn form_submit_invalid_email_keeps_input_and_skips_store() {
    let store = Arc::new(BrokenStore::default());
    let app = app_with(Arc::clone(&store) as Arc<dyn DocumentStore>);

    let (status, body) = send(app, form_post("not-an-email")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Please enter a valid email address."));
    assert!(body.contains("value=\"not-an-email\""));
    assert_eq!(store.attempts.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn form_submit_store_failure_keeps_input_and_shows_generic_error() {
    let store = Arc::new(BrokenStore::default());
    let app = app_with(Arc::clone(&store) as Arc<dyn DocumentStore>);

    let (status, body) = send(app, form_post("User@Example.com")).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.contains("Error saving email. Please try again."));
    assert!(body.contains("value=\"User@Example.com\""));
    assert!(!body.contains("insufficient permissions"));
    assert_eq!(store.attempts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn form_submit_without_email_field_is_invalid() {
    let store = MemoryStore::new();
    let app = app_with(Arc::new(store.clone()));
    let req = Request::post("/waitlist")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::empty())
        .unwrap();

    let (status, _) = send(app, req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn repeated_submissions_are_not_deduplicated() {
    let store = MemoryStore::new();
    let app = app_with(Arc::new(store.clone()));

    send(app.clone(), form_post("same@example.com")).await;
    send(app, form_post("same@example.com")).await;

    assert_eq!(store.documents("waitlist").await.len(), 2);
}

// ── JSON endpoint ────────────────────────────────────────────────────

#[tokio::test]
async fn json_submit_returns_created() {
    let store = MemoryStore::new();
    let app = app_with(Arc::new(store.clone()));

    let (status, body) = send(app, json_post(r#"{"email":"Json@Example.org"}"#)).await;

    assert_eq!(status, StatusCode::CREATED);
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["status"], "joined");
    let docs = store.documents("waitlist").await;
    assert_eq!(value["id"], docs[0].0.as_str());
}

#[tokio::test]
async fn json_submit_invalid_is_bad_request() {
    let app = app_with(Arc::new(MemoryStore::new()));

    let (status, body) = send(app, json_post(r#"{"email":"nope"}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["error"], "bad_request");
}

#[tokio::test]
async fn json_submit_store_failure_is_generic() {
    let app = app_with(Arc::new(BrokenStore::default()));

    let (status, body) = send(app, json_post(r#"{"email":"a@b.co"}"#)).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["error"], "store_unavailable");
    assert!(!body.contains("permissions"));
}

// ── Health ───────────────────────────────────────────────────────────

#[tokio::test]
async fn health_reports_store_backend() {
    let app = app_with(Arc::new(MemoryStore::new()));
    let (status, body) = send(app, Request::get("/health").body(Body::empty()).unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["status"], "ok");
    assert_eq!(value["store"], "memory");
}

// ── Assets ───────────────────────────────────────────────────────────

#[tokio::test]
async fn missing_asset_is_not_found() {
    let app = app_with(Arc::new(MemoryStore::new()));
    let (status, _) = send(
        app,
        Request::get("/assets/does-not-exist.png").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
