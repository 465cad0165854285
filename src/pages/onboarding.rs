//! Onboarding page — pick category priorities after registration.
//!
//! Click order is priority order: the first category tapped becomes the
//! user's top focus. Tapping again removes it.

#[cfg(test)]
#[path = "onboarding_test.rs"]
mod onboarding_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::preferences::{Category, CategoryPriorities};
use crate::util::persistence::KeyValueStore;

fn toggle_category(ordered: &mut Vec<Category>, category: Category) {
    if let Some(pos) = ordered.iter().position(|c| *c == category) {
        ordered.remove(pos);
    } else {
        ordered.push(category);
    }
}

fn priority_badge(ordered: &[Category], category: Category) -> Option<usize> {
    ordered.iter().position(|c| *c == category).map(|pos| pos + 1)
}

#[component]
pub fn OnboardingPage() -> impl IntoView {
    let storage = expect_context::<Arc<dyn KeyValueStore>>();
    let navigate = use_navigate();
    let ordered = RwSignal::new(CategoryPriorities::load(storage.as_ref()).ordered);

    let on_save = move |_| {
        CategoryPriorities { ordered: ordered.get() }.save(storage.as_ref());
        navigate("/dashboard", NavigateOptions::default());
    };

    view! {
        <div class="onboarding">
            <h1>"What clutters you most?"</h1>
            <p>"Tap in order of priority. You can change this later."</p>
            <div class="onboarding__grid">
                {Category::ALL
                    .into_iter()
                    .map(|category| {
                        view! {
                            <button
                                class="onboarding__category"
                                on:click=move |_| ordered.update(|o| toggle_category(o, category))
                            >
                                {category.label()}
                                <span class="onboarding__badge">
                                    {move || {
                                        priority_badge(&ordered.get(), category)
                                            .map(|n| format!("#{n}"))
                                            .unwrap_or_default()
                                    }}
                                </span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <button class="onboarding__done" on:click=on_save>"Done"</button>
        </div>
    }
}
