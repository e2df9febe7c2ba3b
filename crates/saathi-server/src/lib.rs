//! `SugarSaathi` landing page server.
//!
//! Wires the waitlist submitter and document store into an Axum server.
//! Serves the marketing page at `/`, the waitlist form post at `/waitlist`,
//! a JSON endpoint at `/v1/waitlist`, and static assets at `/assets`.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
