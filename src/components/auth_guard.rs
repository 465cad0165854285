//! Route gate component wrapping all routed content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Drives `NavigationGate` on every location change and renders its verdict:
//! a neutral loading view while checking, nothing when denied (the redirect
//! replaces the view), the routed content when granted. All decision logic
//! lives in `state::gate`; this component only wires it to the router.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::gate::{GateStatus, NavigationGate, NavigationStep};
use crate::state::identity::IdentityStore;
use crate::util::routes::UNAUTHENTICATED_LANDING;

/// Gate every navigation; children render only once access is granted.
#[component]
pub fn AuthGuard(children: ChildrenFn) -> impl IntoView {
    let identity = expect_context::<IdentityStore>();
    let gate = Arc::new(NavigationGate::new());
    let status = RwSignal::new(GateStatus::Checking);
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let path = location.pathname.get();
        match gate.begin(&path, &identity.get()) {
            NavigationStep::Settled(GateStatus::Denied) => {
                status.set(GateStatus::Denied);
                navigate(UNAUTHENTICATED_LANDING, NavigateOptions::default());
            }
            NavigationStep::Settled(settled) => status.set(settled),
            NavigationStep::NeedsVerification { nav, user_id } => {
                status.set(GateStatus::Checking);
                #[cfg(feature = "hydrate")]
                {
                    let gate = gate.clone();
                    let identity = identity.clone();
                    let navigate = navigate.clone();
                    leptos::task::spawn_local(async move {
                        let verdict = crate::state::session::verify_session(user_id).await;
                        match gate.conclude(nav, &verdict, &identity) {
                            Some(GateStatus::Denied) => {
                                status.set(GateStatus::Denied);
                                navigate(UNAUTHENTICATED_LANDING, NavigateOptions::default());
                            }
                            Some(settled) => status.set(settled),
                            // Superseded by a newer navigation; drop silently.
                            None => {}
                        }
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (nav, user_id);
                }
            }
        }
    });

    view! {
        {move || match status.get() {
            GateStatus::Checking => view! {
                <div class="gate-loading" aria-busy="true">
                    <span class="spinner"></span>
                </div>
            }
            .into_any(),
            GateStatus::Denied => ().into_any(),
            GateStatus::Granted => children(),
        }}
    }
}
