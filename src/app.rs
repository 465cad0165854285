//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_guard::AuthGuard;
use crate::pages::{
    dashboard::DashboardPage, forgot_password::ForgotPasswordPage, insights::InsightsPage,
    legal::PrivacyPage, legal::TermsPage, login::LoginPage, onboarding::OnboardingPage,
    organize::OrganizePage, register::RegisterPage, settings::SettingsPage,
    showcase::MobileDemoPage, showcase::ShowcasePage, subscribe::SubscribePage,
    welcome::WelcomePage,
};
use crate::state::declutter::DeclutterState;
use crate::state::identity::IdentityStore;
use crate::state::subscription::SubscriptionAccess;
use crate::util::persistence::{KeyValueStore, default_store};
use crate::util::theme;

/// Root application component.
///
/// Builds the injectable services, provides shared state contexts, and sets
/// up client-side routing behind the access gate.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let storage: Arc<dyn KeyValueStore> = default_store();
    let identity_store = IdentityStore::new(storage.clone());

    // Reactive mirror of the identity store, kept fresh by its broadcast.
    let identity = RwSignal::new(identity_store.get());
    identity_store.subscribe(move |snapshot| identity.set(snapshot.clone()));

    let access = RwSignal::new(SubscriptionAccess::free());
    let declutter = RwSignal::new(DeclutterState::default());
    let dark_mode = RwSignal::new(theme::read_preference());
    theme::apply(dark_mode.get_untracked());

    provide_context(storage);
    provide_context(identity_store);
    provide_context(identity);
    provide_context(access);
    provide_context(declutter);
    provide_context(dark_mode);

    // Paywall flags follow the identity: login, logout, and gate-triggered
    // clears all refresh them.
    Effect::new(move || {
        let snapshot = identity.get();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            access.set(crate::state::subscription::load_access(&snapshot).await);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = snapshot;
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/clearspace.css"/>
        <Title text="Clearspace"/>

        <Router>
            <AuthGuard>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=WelcomePage/>
                    <Route path=StaticSegment("welcome") view=WelcomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                    <Route path=StaticSegment("terms") view=TermsPage/>
                    <Route path=StaticSegment("privacy") view=PrivacyPage/>
                    <Route path=StaticSegment("subscribe") view=SubscribePage/>
                    <Route path=StaticSegment("showcase") view=ShowcasePage/>
                    <Route path=StaticSegment("mobile-demo") view=MobileDemoPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("organize") view=OrganizePage/>
                    <Route path=StaticSegment("insights") view=InsightsPage/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                    <Route path=StaticSegment("onboarding") view=OnboardingPage/>
                </Routes>
            </AuthGuard>
        </Router>
    }
}
