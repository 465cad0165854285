//! Per-navigation route access decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `NavigationGate` is the framework-free core of the access gate; the
//! `AuthGuard` component drives it from the router and renders its verdicts.
//! Each navigation runs `Checking -> {Granted, Denied}`; a new navigation
//! supersedes any verification still in flight, and the stale result is
//! discarded on arrival.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use std::sync::atomic::{AtomicU64, Ordering};

use crate::state::identity::{Identity, IdentityStore};
use crate::state::session::SessionVerdict;
use crate::util::routes;

/// Render state of the gate for the current navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateStatus {
    /// Verification in flight; render a neutral loading view only.
    Checking,
    /// Render the requested route's content.
    Granted,
    /// Render nothing; the redirect to the landing route replaces the view.
    Denied,
}

/// First step of a navigation decision.
#[derive(Debug, PartialEq, Eq)]
pub enum NavigationStep {
    /// Decided without the network: public route, or no local session.
    Settled(GateStatus),
    /// A session exists locally; confirm it server-side, then call
    /// [`NavigationGate::conclude`] with this navigation's token.
    NeedsVerification { nav: u64, user_id: i64 },
}

/// The access-control decision machine, evaluated once per navigation.
#[derive(Debug, Default)]
pub struct NavigationGate {
    epoch: AtomicU64,
}

impl NavigationGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a navigation to `path` with the current `identity` snapshot.
    ///
    /// Supersedes any earlier navigation: in-flight verifications holding an
    /// older token will be discarded by [`conclude`](Self::conclude).
    /// Evaluation order is fixed: public short-circuit first (the verifier is
    /// never consulted for public routes, whatever the identity says), then
    /// the local session check, then verification.
    pub fn begin(&self, path: &str, identity: &Identity) -> NavigationStep {
        let nav = self.epoch.fetch_add(1, Ordering::Relaxed) + 1;
        if routes::is_public(path) {
            return NavigationStep::Settled(GateStatus::Granted);
        }
        match identity.user_id {
            Some(user_id) if identity.is_authenticated => {
                NavigationStep::NeedsVerification { nav, user_id }
            }
            _ => NavigationStep::Settled(GateStatus::Denied),
        }
    }

    /// Apply a verification verdict for the navigation identified by `nav`.
    ///
    /// Returns `None` when a newer navigation has superseded `nav`; the stale
    /// verdict must have no effect, including on the identity store. Only a
    /// current `NotFound` destroys the session; `Indeterminate` fails open.
    pub fn conclude(
        &self,
        nav: u64,
        verdict: &SessionVerdict,
        identity: &IdentityStore,
    ) -> Option<GateStatus> {
        if self.epoch.load(Ordering::Relaxed) != nav {
            return None;
        }
        match verdict {
            SessionVerdict::Confirmed { .. } | SessionVerdict::Indeterminate => {
                Some(GateStatus::Granted)
            }
            SessionVerdict::NotFound => {
                identity.clear();
                Some(GateStatus::Denied)
            }
        }
    }
}
