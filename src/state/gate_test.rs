use std::sync::{Arc, Mutex};

use super::*;
use crate::util::persistence::MemoryStore;
use crate::util::routes::PUBLIC_ROUTES;

fn signed_in_store(user_id: i64, email: &str) -> IdentityStore {
    let store = IdentityStore::new(Arc::new(MemoryStore::default()));
    store.set(user_id, email);
    store
}

fn begin_verification(gate: &NavigationGate, store: &IdentityStore, path: &str) -> (u64, i64) {
    match gate.begin(path, &store.get()) {
        NavigationStep::NeedsVerification { nav, user_id } => (nav, user_id),
        step => panic!("expected verification step, got {step:?}"),
    }
}

#[test]
fn public_routes_grant_without_verification_for_any_identity() {
    let gate = NavigationGate::new();
    for route in PUBLIC_ROUTES {
        assert_eq!(
            gate.begin(route, &Identity::signed_out()),
            NavigationStep::Settled(GateStatus::Granted),
            "{route} with empty identity"
        );
        assert_eq!(
            gate.begin(route, &Identity::signed_in(7, "a@b.com")),
            NavigationStep::Settled(GateStatus::Granted),
            "{route} with session"
        );
    }
}

#[test]
fn protected_route_without_session_denies_without_verification() {
    let gate = NavigationGate::new();
    assert_eq!(
        gate.begin("/dashboard", &Identity::signed_out()),
        NavigationStep::Settled(GateStatus::Denied)
    );
}

#[test]
fn protected_route_with_unauthenticated_remembered_user_denies() {
    let gate = NavigationGate::new();
    let identity = Identity {
        user_id: Some(7),
        email: Some("a@b.com".to_owned()),
        is_authenticated: false,
    };
    assert_eq!(
        gate.begin("/settings", &identity),
        NavigationStep::Settled(GateStatus::Denied)
    );
}

#[test]
fn confirmed_verdict_grants_and_keeps_identity() {
    let gate = NavigationGate::new();
    let store = signed_in_store(7, "a@b.com");
    let (nav, user_id) = begin_verification(&gate, &store, "/dashboard");
    assert_eq!(user_id, 7);

    let verdict = SessionVerdict::Confirmed { email: "a@b.com".to_owned() };
    assert_eq!(gate.conclude(nav, &verdict, &store), Some(GateStatus::Granted));
    assert_eq!(store.get(), Identity::signed_in(7, "a@b.com"));
}

#[test]
fn not_found_verdict_clears_identity_and_denies() {
    let gate = NavigationGate::new();
    let store = signed_in_store(7, "a@b.com");
    let (nav, _) = begin_verification(&gate, &store, "/dashboard");

    assert_eq!(
        gate.conclude(nav, &SessionVerdict::NotFound, &store),
        Some(GateStatus::Denied)
    );
    assert_eq!(store.get(), Identity::signed_out());
}

#[test]
fn indeterminate_verdict_fails_open_and_keeps_identity() {
    let gate = NavigationGate::new();
    let store = signed_in_store(7, "a@b.com");
    let (nav, _) = begin_verification(&gate, &store, "/insights");

    assert_eq!(
        gate.conclude(nav, &SessionVerdict::Indeterminate, &store),
        Some(GateStatus::Granted)
    );
    assert_eq!(store.get(), Identity::signed_in(7, "a@b.com"));
}

#[test]
fn repeated_not_found_navigation_is_idempotent() {
    let gate = NavigationGate::new();
    let store = signed_in_store(7, "a@b.com");
    let clears = Arc::new(Mutex::new(0_u32));
    let counter = clears.clone();
    store.subscribe(move |identity| {
        if *identity == Identity::signed_out() {
            *counter.lock().unwrap() += 1;
        }
    });

    let (nav, _) = begin_verification(&gate, &store, "/dashboard");
    assert_eq!(
        gate.conclude(nav, &SessionVerdict::NotFound, &store),
        Some(GateStatus::Denied)
    );

    // Second attempt at the same navigation: the session is already gone, so
    // the gate settles locally with no further side effects.
    assert_eq!(
        gate.begin("/dashboard", &store.get()),
        NavigationStep::Settled(GateStatus::Denied)
    );
    assert_eq!(*clears.lock().unwrap(), 1);
}

#[test]
fn superseded_verification_is_discarded_without_side_effects() {
    let gate = NavigationGate::new();
    let store = signed_in_store(7, "a@b.com");

    let (stale_nav, _) = begin_verification(&gate, &store, "/dashboard");
    let (current_nav, _) = begin_verification(&gate, &store, "/insights");

    // The stale result arrives after the second navigation started: even a
    // destructive verdict must be ignored.
    assert_eq!(gate.conclude(stale_nav, &SessionVerdict::NotFound, &store), None);
    assert_eq!(store.get(), Identity::signed_in(7, "a@b.com"));

    let verdict = SessionVerdict::Confirmed { email: "a@b.com".to_owned() };
    assert_eq!(gate.conclude(current_nav, &verdict, &store), Some(GateStatus::Granted));
}

#[test]
fn conclude_for_already_replaced_navigation_never_resurrects_loading() {
    let gate = NavigationGate::new();
    let store = signed_in_store(7, "a@b.com");

    let (nav, _) = begin_verification(&gate, &store, "/dashboard");
    // Navigating to a public route also supersedes the pending verification.
    assert_eq!(
        gate.begin("/terms", &store.get()),
        NavigationStep::Settled(GateStatus::Granted)
    );
    assert_eq!(gate.conclude(nav, &SessionVerdict::NotFound, &store), None);
    assert_eq!(store.get(), Identity::signed_in(7, "a@b.com"));
}
