//! Premium-access derivation from the user's subscription status.
//!
//! FAILURE POLICY
//! ==============
//! The paywall fails safe: absent identity, a failed lookup, or a status
//! value outside the known set all resolve to the free profile. Premium
//! access is only ever granted on a positively recognized paid status.

#[cfg(test)]
#[path = "subscription_test.rs"]
mod subscription_test;

use crate::net::api::{self, ApiError};
use crate::net::types::{SubscriptionStatus, UserRecord};
use crate::state::identity::Identity;

/// Derived paywall flags consumed by premium-gated UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionAccess {
    /// Premium content unlocked (`active` or `lifetime`).
    pub is_active: bool,
    pub is_lifetime: bool,
    pub is_trial: bool,
    pub is_free: bool,
}

impl SubscriptionAccess {
    /// The default profile: no paid access.
    #[must_use]
    pub fn free() -> Self {
        Self {
            is_active: false,
            is_lifetime: false,
            is_trial: false,
            is_free: true,
        }
    }
}

impl Default for SubscriptionAccess {
    fn default() -> Self {
        Self::free()
    }
}

impl From<SubscriptionStatus> for SubscriptionAccess {
    fn from(status: SubscriptionStatus) -> Self {
        match status {
            SubscriptionStatus::Active => Self {
                is_active: true,
                is_lifetime: false,
                is_trial: false,
                is_free: false,
            },
            SubscriptionStatus::Lifetime => Self {
                is_active: true,
                is_lifetime: true,
                is_trial: false,
                is_free: false,
            },
            SubscriptionStatus::Trial => Self {
                is_active: false,
                is_lifetime: false,
                is_trial: true,
                is_free: false,
            },
            // Canceled and past-due accounts are recognized but hold neither
            // paid access nor the free profile's flag.
            SubscriptionStatus::Canceled | SubscriptionStatus::PastDue => Self {
                is_active: false,
                is_lifetime: false,
                is_trial: false,
                is_free: false,
            },
            SubscriptionStatus::Free | SubscriptionStatus::Unknown => Self::free(),
        }
    }
}

/// Map a user-lookup result to access flags; any failure is the free profile.
#[must_use]
pub fn access_from_lookup(result: Result<UserRecord, ApiError>) -> SubscriptionAccess {
    match result {
        Ok(user) => SubscriptionAccess::from(user.subscription_status),
        Err(e) => {
            log::warn!("subscription lookup failed, defaulting to free: {e}");
            SubscriptionAccess::free()
        }
    }
}

/// Fetch and derive the current user's access flags.
///
/// Without a usable session this resolves to the free profile immediately,
/// with no network call.
pub async fn load_access(identity: &Identity) -> SubscriptionAccess {
    match identity.user_id {
        Some(user_id) if identity.is_authenticated => {
            access_from_lookup(api::fetch_user(user_id).await)
        }
        _ => SubscriptionAccess::free(),
    }
}
