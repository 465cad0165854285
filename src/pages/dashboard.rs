//! Dashboard page — the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches the snapshot, streak, and tip feed once on mount; every fetch
//! failure degrades to an empty state rather than an error surface.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::state::declutter::DeclutterState;
use crate::state::identity::Identity;

fn greeting_for(email: Option<&str>) -> String {
    match email {
        Some(email) => format!("Welcome back, {email}"),
        None => "Welcome back".to_owned(),
    }
}

fn streak_line(current: i64, longest: i64) -> String {
    if current == 0 {
        "Start a clearing streak today.".to_owned()
    } else {
        format!("{current}-day streak (best: {longest})")
    }
}

/// Days since the Unix epoch, used to rotate the tip of the day.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn day_index() -> usize {
    #[cfg(feature = "hydrate")]
    {
        (js_sys::Date::now() / 86_400_000.0) as usize
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let identity = expect_context::<RwSignal<Identity>>();
    let declutter = expect_context::<RwSignal<DeclutterState>>();

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        declutter.update(|s| s.loading = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let snapshot = crate::net::api::fetch_snapshot().await;
            let streak = crate::net::api::fetch_streak().await;
            let tips = crate::net::api::fetch_tips().await.unwrap_or_default();
            declutter.update(|s| {
                s.snapshot = snapshot;
                s.streak = streak;
                s.tips = tips;
                s.loading = false;
            });
        });
    });

    view! {
        <div class="dashboard">
            <h1>{move || greeting_for(identity.get().email.as_deref())}</h1>
            <section class="dashboard__stats">
                <div class="stat-card">
                    <span class="stat-card__value">{move || declutter.get().total_items()}</span>
                    <span class="stat-card__label">"items tracked"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__value">
                        {move || {
                            let streak = declutter.get().streak.unwrap_or_default();
                            streak_line(streak.current, streak.longest)
                        }}
                    </span>
                    <span class="stat-card__label">"progress"</span>
                </div>
            </section>
            <section class="dashboard__tip">
                {move || {
                    declutter
                        .get()
                        .tip_of_the_day(day_index())
                        .map(|tip| view! { <p class="tip">{tip.text.clone()}</p> }.into_any())
                        .unwrap_or_else(|| ().into_any())
                }}
            </section>
            <nav class="dashboard__nav">
                <a href="/organize">"Organize"</a>
                <a href="/insights">"Insights"</a>
                <a href="/settings">"Settings"</a>
            </nav>
        </div>
    }
}
