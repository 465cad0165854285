//! Static legal pages.

use leptos::prelude::*;

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <div class="legal-page">
            <h1>"Terms of Service"</h1>
            <p>"Clearspace is provided as-is for personal use. Don't abuse the service, and we'll keep it running for you."</p>
            <p>"Subscriptions renew until canceled; cancellation takes effect at the end of the billing period."</p>
            <p><a href="/">"Back home"</a></p>
        </div>
    }
}

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <div class="legal-page">
            <h1>"Privacy Policy"</h1>
            <p>"Your snapshot counts and preferences stay in your account. We never sell your data."</p>
            <p>"Session and theme settings are stored on your device and can be cleared by signing out."</p>
            <p><a href="/">"Back home"</a></p>
        </div>
    }
}
