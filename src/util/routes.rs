//! Route classification for the access gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! The public set is fixed at build time. Everything else is protected and
//! must pass the session gate before rendering.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Landing route the gate redirects to when access is denied.
pub const UNAUTHENTICATED_LANDING: &str = "/login";

/// Routes that render without any session check.
pub const PUBLIC_ROUTES: [&str; 10] = [
    "/",
    "/welcome",
    "/login",
    "/register",
    "/forgot-password",
    "/terms",
    "/privacy",
    "/subscribe",
    "/showcase",
    "/mobile-demo",
];

/// Strip query, hash, and trailing slashes so `/terms/?x=1` classifies
/// the same as `/terms`.
#[must_use]
pub fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Whether `path` is in the public set.
#[must_use]
pub fn is_public(path: &str) -> bool {
    let normalized = normalize_path(path);
    PUBLIC_ROUTES.contains(&normalized)
}
