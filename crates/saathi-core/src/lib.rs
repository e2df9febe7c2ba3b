//! Core library for the `SugarSaathi` landing service.
//!
//! Contains the email validator, the waitlist entry model and submitter,
//! the marketing content shown on the landing page, and the small bits of
//! view state the page carries (feature tab, FAQ accordion, waitlist form).
//! This crate depends on `saathi-store` for the document store trait and
//! knows nothing about HTTP.

pub mod content;
pub mod email;
pub mod entry;
pub mod error;
pub mod view;
pub mod waitlist;
