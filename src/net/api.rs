//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native builds: stubs that report the transport as unavailable, since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The user lookup keeps the full `ApiError` taxonomy because the session
//! gate's fail-open contract depends on telling "account gone" (404) apart
//! from every other failure. Form and dashboard fetches degrade to
//! `Option`/`Result<_, String>` so UI flows never crash on network trouble.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuthResponse, DigitalSnapshot, Streak, Tip, UserRecord};

/// A REST call failed.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested record does not exist server-side.
    #[error("not found")]
    NotFound,
    /// Any other non-success HTTP status.
    #[error("unexpected status {0}")]
    Status(u16),
    /// The transport layer failed before a status was available.
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not match the expected schema.
    #[error("malformed response: {0}")]
    Decode(String),
}

#[cfg(feature = "hydrate")]
const SNAPSHOT_ENDPOINT: &str = "/api/digital-data";
#[cfg(feature = "hydrate")]
const STREAKS_ENDPOINT: &str = "/api/streaks";
#[cfg(feature = "hydrate")]
const TIPS_ENDPOINT: &str = "/api/tips";

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(user_id: i64) -> String {
    format!("/api/users/{user_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_lookup_error(status: u16) -> ApiError {
    if status == 404 {
        ApiError::NotFound
    } else {
        ApiError::Status(status)
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn auth_failed_message(action: &str, status: u16) -> String {
    format!("{action} failed: {status}")
}

/// Fetch the user record for `user_id` from `GET /api/users/{id}`.
///
/// # Errors
///
/// `NotFound` only when the server positively reports the record gone;
/// everything else maps to `Status`/`Network`/`Decode`.
pub async fn fetch_user(user_id: i64) -> Result<UserRecord, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&user_endpoint(user_id))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(user_lookup_error(resp.status()));
        }
        resp.json::<UserRecord>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Log in via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns a user-displayable message when the request or credentials fail.
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(auth_failed_message("login", resp.status()));
        }
        resp.json::<AuthResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available outside the browser".to_owned())
    }
}

/// Create an account via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns a user-displayable message when the request fails.
pub async fn register(email: &str, password: &str) -> Result<AuthResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/register")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(auth_failed_message("registration", resp.status()));
        }
        resp.json::<AuthResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available outside the browser".to_owned())
    }
}

/// Request a password-reset email via `POST /api/auth/forgot-password`.
///
/// The caller shows a neutral confirmation regardless of whether the email
/// exists; only transport failures surface.
///
/// # Errors
///
/// Returns a user-displayable message when the request cannot be sent.
pub async fn forgot_password(email: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email });
        gloo_net::http::Request::post("/api/auth/forgot-password")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch the latest digital-data snapshot. `None` on any failure.
pub async fn fetch_snapshot() -> Option<DigitalSnapshot> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(SNAPSHOT_ENDPOINT).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<DigitalSnapshot>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist a digital-data snapshot via `PUT /api/digital-data`.
///
/// # Errors
///
/// Returns a user-displayable message when the save fails.
pub async fn save_snapshot(snapshot: &DigitalSnapshot) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(SNAPSHOT_ENDPOINT)
            .json(snapshot)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("snapshot save failed: {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = snapshot;
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch the current decluttering streak. `None` on any failure.
pub async fn fetch_streak() -> Option<Streak> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(STREAKS_ENDPOINT).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Streak>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the tip feed. `None` on any failure.
pub async fn fetch_tips() -> Option<Vec<Tip>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(TIPS_ENDPOINT).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Tip>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
