//! Password-reset request page.
//!
//! Shows the same neutral confirmation whether or not the email exists, so
//! the form cannot be used to probe for accounts.

use leptos::prelude::*;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        if email_value.is_empty() {
            info.set("Enter your email first.".to_owned());
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let _ = crate::net::api::forgot_password(&email_value).await;
            info.set("If that address has an account, a reset link is on its way.".to_owned());
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email_value;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Reset password"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="auth-submit" type="submit" disabled=move || busy.get()>
                        "Send reset link"
                    </button>
                </form>
                <p class="auth-info">{move || info.get()}</p>
                <p class="auth-links">
                    <a href="/login">"Back to sign in"</a>
                </p>
            </div>
        </div>
    }
}
