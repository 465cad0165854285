//! Networking modules for the REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles HTTP calls and `types` defines the shared wire schema.
//! The session verifier and subscription lookup build on `api::fetch_user`.

pub mod api;
pub mod types;
