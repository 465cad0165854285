//! Public subscription page with plan overview.
//!
//! Purchase checkout itself is handled by the payment provider; this page
//! only presents plans and reflects the signed-in user's current access.

use leptos::prelude::*;

use crate::state::subscription::SubscriptionAccess;

#[component]
pub fn SubscribePage() -> impl IntoView {
    let access = expect_context::<RwSignal<SubscriptionAccess>>();

    view! {
        <div class="plans">
            <h1>"Clearspace Premium"</h1>
            <p class="plans__status">
                {move || {
                    let access = access.get();
                    if access.is_lifetime {
                        "You have lifetime access. Thank you!"
                    } else if access.is_active {
                        "Your subscription is active."
                    } else if access.is_trial {
                        "You're on a trial — pick a plan to keep premium features."
                    } else {
                        "Unlock insights and unlimited snapshots."
                    }
                }}
            </p>
            <div class="plans__grid">
                <div class="plan-card">
                    <h2>"Monthly"</h2>
                    <p class="plan-card__price">"$3.99/mo"</p>
                </div>
                <div class="plan-card">
                    <h2>"Yearly"</h2>
                    <p class="plan-card__price">"$29.99/yr"</p>
                </div>
                <div class="plan-card">
                    <h2>"Lifetime"</h2>
                    <p class="plan-card__price">"$79 once"</p>
                </div>
            </div>
            <p><a href="/dashboard">"Back to dashboard"</a></p>
        </div>
    }
}
