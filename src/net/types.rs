//! Wire DTOs for the REST boundary.
//!
//! DESIGN
//! ======
//! Field names follow the API's camelCase JSON so serde round-trips stay
//! lossless. Open-ended enum fields carry an `Unknown` catch-all instead of
//! failing the whole record: a new server-side value must never break
//! deserialization of an otherwise valid user.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A user record as returned by `GET /api/users/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Server-assigned numeric user id.
    pub id: i64,
    /// Account email address.
    pub email: String,
    /// Billing state of the account; drives paywall gating.
    #[serde(default)]
    pub subscription_status: SubscriptionStatus,
    /// End of the trial window (ISO-8601), present only while on trial.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_ends_at: Option<String>,
}

/// Subscription state of a user account on the wire.
///
/// Values outside the known set deserialize as `Unknown` and must be treated
/// as unpaid everywhere downstream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    #[default]
    Free,
    Active,
    Trial,
    Canceled,
    PastDue,
    Lifetime,
    #[serde(other)]
    Unknown,
}

/// Successful login/registration payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub id: i64,
    pub email: String,
}

/// Per-category item counts the user records for their digital footprint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitalSnapshot {
    pub photos: i64,
    pub videos: i64,
    pub apps: i64,
    pub emails: i64,
    pub files: i64,
    pub downloads: i64,
}

/// Decluttering streak as returned by `GET /api/streaks`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    /// Consecutive active days ending today.
    pub current: i64,
    /// Best streak on record.
    pub longest: i64,
}

/// A decluttering tip as returned by `GET /api/tips`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    pub id: i64,
    pub text: String,
    /// Category slug the tip applies to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}
