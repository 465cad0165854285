//! Public demo pages used in marketing links.

use leptos::prelude::*;

#[component]
pub fn ShowcasePage() -> impl IntoView {
    view! {
        <div class="showcase">
            <h1>"What Clearspace looks like"</h1>
            <p>"A sample week: 5,400 emails triaged down to 120, a 9-day streak, and a photo library that finally fits."</p>
            <a class="landing__cta" href="/register">"Try it yourself"</a>
        </div>
    }
}

#[component]
pub fn MobileDemoPage() -> impl IntoView {
    view! {
        <div class="showcase showcase--mobile">
            <h1>"Clearspace on your phone"</h1>
            <p>"Install from your browser menu and your streak comes with you."</p>
            <a class="landing__secondary" href="/welcome">"Learn more"</a>
        </div>
    }
}
