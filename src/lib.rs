//! SOMA web frontend.
//!
//! Context-driven architecture with three cooperating pieces:
//! - `session`: authentication state store (mock, persisted locally)
//! - `web::route` / `web::router`: route domain model + routing engine
//! - `components::guard`: in-place gating of premium pages
//! - `pages` / `components`: the presentational layer

mod session;

mod components {
    pub mod data_quality;
    pub mod footer;
    pub mod guard;
    pub mod icons;
    pub mod image_card;
    pub mod navigation;
    pub mod stat_card;
}

mod pages {
    pub mod air_quality;
    pub mod auth;
    pub mod carbon_credits;
    pub mod dashboard;
    pub mod earth_data;
    pub mod home;
    pub mod info;
    pub mod not_found;
    pub mod practices;
    pub mod reports;
    pub mod soil_health;
    pub mod water_usage;
    pub mod weather;
}

// Native Web API wrappers.
// Lightweight layers over the browser APIs instead of the gloo-* crates,
// to keep the WASM binary small.
pub(crate) mod web {
    mod log;
    pub mod route;
    pub mod router;
    mod storage;
    mod timer;

    pub use log::{console_log, console_warn};
    pub use storage::LocalStorage;
    pub use timer::sleep;
}

use crate::components::footer::Footer;
use crate::components::guard::Protected;
use crate::components::navigation::Navigation;
use crate::pages::air_quality::AirQualityPage;
use crate::pages::auth::{LoginPage, SignupPage};
use crate::pages::carbon_credits::CarbonCreditsPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::earth_data::EarthDataPage;
use crate::pages::home::HomePage;
use crate::pages::info::{AboutPage, ContactPage, PrivacyPage, TermsPage};
use crate::pages::not_found::NotFoundPage;
use crate::pages::practices::PracticesPage;
use crate::pages::reports::ReportsPage;
use crate::pages::soil_health::SoilHealthPage;
use crate::pages::water_usage::WaterUsagePage;
use crate::pages::weather::WeatherPage;
use crate::session::{SessionContext, init_session};
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet};

use leptos::prelude::*;

/// Route matcher.
///
/// Maps the current route to its view. Premium routes are wrapped in the
/// guard, which substitutes the login wall while the session is
/// unauthenticated; everything else renders directly.
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Dashboard => view! {
            <Protected route=AppRoute::Dashboard>
                <DashboardPage />
            </Protected>
        }
        .into_any(),
        AppRoute::SoilHealth => view! {
            <Protected route=AppRoute::SoilHealth>
                <SoilHealthPage />
            </Protected>
        }
        .into_any(),
        AppRoute::WaterUsage => view! {
            <Protected route=AppRoute::WaterUsage>
                <WaterUsagePage />
            </Protected>
        }
        .into_any(),
        AppRoute::Practices => view! {
            <Protected route=AppRoute::Practices>
                <PracticesPage />
            </Protected>
        }
        .into_any(),
        AppRoute::CarbonCredits => view! {
            <Protected route=AppRoute::CarbonCredits>
                <CarbonCreditsPage />
            </Protected>
        }
        .into_any(),
        AppRoute::Reports => view! {
            <Protected route=AppRoute::Reports>
                <ReportsPage />
            </Protected>
        }
        .into_any(),
        AppRoute::EarthData => view! { <EarthDataPage /> }.into_any(),
        AppRoute::Weather => view! { <WeatherPage /> }.into_any(),
        AppRoute::AirQuality => view! { <AirQualityPage /> }.into_any(),
        AppRoute::About => view! { <AboutPage /> }.into_any(),
        AppRoute::Contact => view! { <ContactPage /> }.into_any(),
        AppRoute::Privacy => view! { <PrivacyPage /> }.into_any(),
        AppRoute::Terms => view! { <TermsPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Signup => view! { <SignupPage /> }.into_any(),
        AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. Create the session context and share it with the whole tree.
    let session = SessionContext::new();
    provide_context(session);

    // 2. Restore a persisted session, if any; malformed entries are dropped.
    init_session(&session);

    view! {
        // 3. Router provides the routing context; the outlet renders pages.
        <Router>
            <Navigation />
            <main class="app-main pt-16 min-h-screen bg-gray-50">
                <RouterOutlet matcher=route_matcher />
            </main>
            <Footer />
        </Router>
    }
}
