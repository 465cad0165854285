//! Insights page — preference-weighted focus ranking.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::paywall::Paywall;
use crate::state::declutter::DeclutterState;
use crate::state::preferences::{CategoryPriorities, insight_lines, rank_focus};
use crate::util::persistence::KeyValueStore;

#[component]
pub fn InsightsPage() -> impl IntoView {
    let declutter = expect_context::<RwSignal<DeclutterState>>();
    let storage = expect_context::<Arc<dyn KeyValueStore>>();

    let lines = Memo::new(move |_| {
        let snapshot = declutter.get().snapshot.unwrap_or_default();
        let priorities = CategoryPriorities::load(storage.as_ref());
        insight_lines(&rank_focus(&snapshot, &priorities))
    });

    view! {
        <div class="insights">
            <h1>"Insights"</h1>
            <p class="insights__headline">
                {move || lines.get().first().cloned().unwrap_or_default()}
            </p>
            <Paywall>
                <ul class="insights__list">
                    {move || {
                        lines
                            .get()
                            .into_iter()
                            .skip(1)
                            .map(|line| view! { <li>{line}</li> })
                            .collect_view()
                    }}
                </ul>
            </Paywall>
            <p><a href="/organize">"Update your snapshot"</a></p>
        </div>
    }
}
