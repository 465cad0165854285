//! Public landing page, also served at the application root.

use leptos::prelude::*;

#[component]
pub fn WelcomePage() -> impl IntoView {
    view! {
        <div class="landing">
            <h1>"Clearspace"</h1>
            <p class="landing__tagline">
                "Track your digital clutter, build a clearing streak, and keep what matters."
            </p>
            <div class="landing__actions">
                <a class="landing__cta" href="/register">"Get started"</a>
                <a class="landing__secondary" href="/login">"Sign in"</a>
            </div>
            <p class="landing__links">
                <a href="/showcase">"See it in action"</a>
            </p>
        </div>
    }
}
