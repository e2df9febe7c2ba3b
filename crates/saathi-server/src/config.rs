//! Server configuration for the landing service.
//!
//! Loads configuration from environment variables with sensible defaults.
//! All settings can be overridden via `SAATHI_*` and `FIRESTORE_*`
//! environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,
    /// Document store backend.
    pub store: StoreBackendType,
    /// Log level filter (e.g., `info`, `debug`, `warn`).
    pub log_level: String,
    /// Directory served under `/assets`.
    pub assets_dir: PathBuf,
}

/// Supported document store backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackendType {
    /// In-memory (development only, entries lost on restart).
    Memory,
    /// Google Cloud Firestore over REST.
    Firestore(FirestoreSettings),
}

/// Firestore connection settings read from the environment.
#[derive(Clone, PartialEq, Eq)]
pub struct FirestoreSettings {
    pub project_id: String,
    pub database: String,
    pub base_url: String,
    pub api_key: Option<String>,
    pub access_token: Option<String>,
    pub timeout: Duration,
}

impl std::fmt::Debug for FirestoreSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirestoreSettings")
            .field("project_id", &self.project_id)
            .field("database", &self.database)
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("access_token", &self.access_token.as_ref().map(|_| "[redacted]"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Configuration problems that stop the server from starting.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `SAATHI_STORE=firestore` without a project id.
    #[error("FIRESTORE_PROJECT_ID must be set when SAATHI_STORE=firestore")]
    MissingProjectId,

    /// Unknown `SAATHI_STORE` value.
    #[error("unknown store backend '{0}' (expected 'memory' or 'firestore')")]
    UnknownStore(String),
}

impl ServerConfig {
    /// Load configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `PORT`: port to bind on (binds to `0.0.0.0`)
    /// - `SAATHI_BIND_ADDR`: full bind address (overrides `PORT`, default: `127.0.0.1:8080`)
    /// - `SAATHI_STORE`: `memory` or `firestore` (default: `memory`)
    /// - `FIRESTORE_PROJECT_ID`: Google Cloud project (required for `firestore`)
    /// - `FIRESTORE_DATABASE`: database id (default: `(default)`)
    /// - `FIRESTORE_BASE_URL`: REST endpoint (default: `https://firestore.googleapis.com`)
    /// - `FIRESTORE_API_KEY`: web API key (optional)
    /// - `FIRESTORE_ACCESS_TOKEN`: OAuth bearer token (optional)
    /// - `SAATHI_REQUEST_TIMEOUT_SECS`: store request timeout (default: `10`)
    /// - `SAATHI_LOG_LEVEL`: log filter (default: `info`)
    /// - `SAATHI_ASSETS_DIR`: static assets directory (default: `./assets`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the store selection is unknown or
    /// incomplete.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Priority: SAATHI_BIND_ADDR > PORT > default 127.0.0.1:8080
        let bind_addr = if let Some(addr) = lookup("SAATHI_BIND_ADDR") {
            addr.parse()
                .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], 8080)))
        } else if let Some(port_str) = lookup("PORT") {
            let port: u16 = port_str.parse().unwrap_or(8080);
            SocketAddr::from(([0, 0, 0, 0], port))
        } else {
            SocketAddr::from(([127, 0, 0, 1], 8080))
        };

        let store_kind = lookup("SAATHI_STORE")
            .unwrap_or_else(|| "memory".to_owned())
            .to_lowercase();

        let store = match store_kind.as_str() {
            "memory" => StoreBackendType::Memory,
            "firestore" => {
                let project_id = lookup("FIRESTORE_PROJECT_ID")
                    .filter(|p| !p.trim().is_empty())
                    .ok_or(ConfigError::MissingProjectId)?;
                let timeout_secs = lookup("SAATHI_REQUEST_TIMEOUT_SECS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10);
                StoreBackendType::Firestore(FirestoreSettings {
                    project_id,
                    database: lookup("FIRESTORE_DATABASE")
                        .unwrap_or_else(|| "(default)".to_owned()),
                    base_url: lookup("FIRESTORE_BASE_URL")
                        .unwrap_or_else(|| "https://firestore.googleapis.com".to_owned()),
                    api_key: lookup("FIRESTORE_API_KEY").filter(|k| !k.is_empty()),
                    access_token: lookup("FIRESTORE_ACCESS_TOKEN").filter(|t| !t.is_empty()),
                    timeout: Duration::from_secs(timeout_secs),
                })
            }
            other => return Err(ConfigError::UnknownStore(other.to_owned())),
        };

        let log_level = lookup("SAATHI_LOG_LEVEL").unwrap_or_else(|| "info".to_owned());

        let assets_dir = lookup("SAATHI_ASSETS_DIR")
            .map_or_else(|| PathBuf::from("./assets"), PathBuf::from);

        Ok(Self {
            bind_addr,
            store,
            log_level,
            assets_dir,
        })
    }
}
