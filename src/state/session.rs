//! Server-side session verification.
//!
//! FAILURE POLICY
//! ==============
//! Only a positive confirmation that the account no longer exists (a 404 on
//! the user lookup) may destroy local session state. Every other failure —
//! 5xx, other 4xx, timeouts, transport errors, undecodable bodies — is
//! `Indeterminate` and keeps the user signed in, so a flaky network or a
//! server incident never locks anyone out. Do not tighten this.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::{self, ApiError};
use crate::net::types::UserRecord;

/// Outcome of verifying a locally stored identity against the server.
///
/// Produced fresh on every protected-route navigation; never cached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionVerdict {
    /// The account exists; `email` is the server's current value.
    Confirmed { email: String },
    /// The account no longer exists server-side.
    NotFound,
    /// The lookup failed for any other reason.
    Indeterminate,
}

/// Classify a user-lookup result into a [`SessionVerdict`].
#[must_use]
pub fn classify_lookup(result: Result<UserRecord, ApiError>) -> SessionVerdict {
    match result {
        Ok(user) => SessionVerdict::Confirmed { email: user.email },
        Err(ApiError::NotFound) => SessionVerdict::NotFound,
        Err(e) => {
            log::warn!("session verification indeterminate: {e}");
            SessionVerdict::Indeterminate
        }
    }
}

/// Ask the server whether `user_id` still names a live account.
///
/// Callers must hold a `user_id` before invoking this; an absent id is
/// "no session" and never reaches the network.
pub async fn verify_session(user_id: i64) -> SessionVerdict {
    classify_lookup(api::fetch_user(user_id).await)
}
