//! Settings page — account, appearance, and sign-out.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::identity::{Identity, IdentityStore};
use crate::util::theme;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let identity_store = expect_context::<IdentityStore>();
    let identity = expect_context::<RwSignal<Identity>>();
    let dark_mode = expect_context::<RwSignal<bool>>();
    let navigate = use_navigate();

    let on_toggle_theme = move |_| {
        let next = theme::toggle(dark_mode.get());
        dark_mode.set(next);
    };

    let on_logout = move |_| {
        identity_store.clear();
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <div class="settings">
            <h1>"Settings"</h1>
            <section class="settings__section">
                <h2>"Account"</h2>
                <p class="settings__email">
                    {move || identity.get().email.unwrap_or_else(|| "Not signed in".to_owned())}
                </p>
            </section>
            <section class="settings__section">
                <h2>"Appearance"</h2>
                <button class="settings__toggle" on:click=on_toggle_theme>
                    {move || if dark_mode.get() { "Switch to light mode" } else { "Switch to dark mode" }}
                </button>
            </section>
            <section class="settings__section">
                <h2>"Session"</h2>
                <button class="settings__logout" on:click=on_logout>"Sign out"</button>
            </section>
        </div>
    }
}
