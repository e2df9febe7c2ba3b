//! Firestore document store, the production backend.
//!
//! Talks to the Firestore REST API with `reqwest`. Only the
//! `createDocument` call is used:
//!
//! ```text
//! POST {base}/v1/projects/{project}/databases/{database}/documents/{collection}?key={api_key}
//! ```
//!
//! Documents are encoded into Firestore's typed value format
//! (`stringValue`, `timestampValue`). The document id is chosen by Firestore
//! and read back from the `name` field of the reply.

use std::time::Duration;

use chrono::SecondsFormat;
use serde::Deserialize;
use serde_json::{Map, Value, json};

use crate::{Document, DocumentId, DocumentStore, FieldValue, StoreError};

/// Default Firestore REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com";

/// Name of the default database in a Firestore project.
pub const DEFAULT_DATABASE: &str = "(default)";

/// Connection settings for [`FirestoreStore`].
#[derive(Clone)]
pub struct FirestoreConfig {
    /// REST endpoint, without trailing slash.
    pub base_url: String,
    /// Google Cloud project id.
    pub project_id: String,
    /// Database id inside the project.
    pub database: String,
    /// Web API key, sent as the `key` query parameter.
    pub api_key: Option<String>,
    /// OAuth access token, sent as a bearer token when set.
    pub access_token: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl FirestoreConfig {
    /// Settings for `project_id` against the public endpoint and default
    /// database, with a 10 second timeout.
    #[must_use]
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            project_id: project_id.into(),
            database: DEFAULT_DATABASE.to_owned(),
            api_key: None,
            access_token: None,
            timeout: Duration::from_secs(10),
        }
    }
}

impl std::fmt::Debug for FirestoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirestoreConfig")
            .field("base_url", &self.base_url)
            .field("project_id", &self.project_id)
            .field("database", &self.database)
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("access_token", &self.access_token.as_ref().map(|_| "[redacted]"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// A document store backed by Google Cloud Firestore.
///
/// Cheap to clone: the underlying `reqwest::Client` pools connections and is
/// shared between clones.
#[derive(Clone)]
pub struct FirestoreStore {
    client: reqwest::Client,
    config: FirestoreConfig,
}

impl std::fmt::Debug for FirestoreStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirestoreStore")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Subset of the `createDocument` reply we care about.
#[derive(Deserialize)]
struct CreatedDocument {
    name: String,
}

/// Error envelope returned by Google APIs.
#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl FirestoreStore {
    /// Build a store from connection settings.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Config`] if the project id or base URL is empty,
    /// or the HTTP client cannot be built.
    pub fn new(config: FirestoreConfig) -> Result<Self, StoreError> {
        if config.project_id.trim().is_empty() {
            return Err(StoreError::Config {
                reason: "firestore project id is empty".to_owned(),
            });
        }
        if config.base_url.trim().is_empty() {
            return Err(StoreError::Config {
                reason: "firestore base URL is empty".to_owned(),
            });
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("saathi-store/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| StoreError::Config {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        let config = FirestoreConfig {
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            ..config
        };

        Ok(Self { client, config })
    }

    /// The settings this store was built with.
    #[must_use]
    pub fn config(&self) -> &FirestoreConfig {
        &self.config
    }

    fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/v1/projects/{}/databases/{}/documents/{}",
            self.config.base_url,
            urlencoding::encode(&self.config.project_id),
            self.config.database,
            urlencoding::encode(collection),
        )
    }
}

#[async_trait::async_trait]
impl DocumentStore for FirestoreStore {
    async fn insert(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<DocumentId, StoreError> {
        let url = self.collection_url(collection);
        let body = encode_document(&document);

        let mut request = self.client.post(&url).json(&body);
        if let Some(key) = &self.config.api_key {
            request = request.query(&[("key", key)]);
        }
        if let Some(token) = &self.config.access_token {
            request = request.bearer_auth(token);
        }

        let resp = request.send().await.map_err(|e| StoreError::Transport {
            collection: collection.to_owned(),
            reason: if e.is_timeout() {
                "request timed out".to_owned()
            } else {
                e.to_string()
            },
        })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&text)
                .map(|env| env.error.message)
                .unwrap_or(text);
            return Err(StoreError::Rejected {
                collection: collection.to_owned(),
                status: status.as_u16(),
                message,
            });
        }

        let created: CreatedDocument = resp.json().await.map_err(|e| StoreError::Decode {
            collection: collection.to_owned(),
            reason: e.to_string(),
        })?;

        let id = created
            .name
            .rsplit('/')
            .next()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| StoreError::Decode {
                collection: collection.to_owned(),
                reason: format!("document name '{}' has no id segment", created.name),
            })?;

        tracing::debug!(collection, id, "firestore document created");
        Ok(DocumentId::new(id))
    }

    fn name(&self) -> &'static str {
        "firestore"
    }
}

/// Encode a document into Firestore's REST representation.
fn encode_document(document: &Document) -> Value {
    let fields: Map<String, Value> = document
        .fields()
        .map(|(name, value)| (name.to_owned(), encode_value(value)))
        .collect();
    json!({ "fields": fields })
}

fn encode_value(value: &FieldValue) -> Value {
    match value {
        FieldValue::String(s) => json!({ "stringValue": s }),
        FieldValue::Timestamp(ts) => {
            json!({ "timestampValue": ts.to_rfc3339_opts(SecondsFormat::Micros, true) })
        }
    }
}
