//! Premium gating wrapper for paid features.

use leptos::prelude::*;

use crate::state::subscription::SubscriptionAccess;

/// Render children only for active subscribers; everyone else sees an
/// upgrade prompt. Fails safe: the default access profile is free.
#[component]
pub fn Paywall(children: ChildrenFn) -> impl IntoView {
    let access = expect_context::<RwSignal<SubscriptionAccess>>();

    view! {
        {move || if access.get().is_active {
            children()
        } else {
            view! {
                <div class="paywall">
                    <p>"This feature is part of Clearspace Premium."</p>
                    <a class="paywall__cta" href="/subscribe">"See plans"</a>
                </div>
            }
            .into_any()
        }}
    }
}
