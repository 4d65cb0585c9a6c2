//! Route guard.
//!
//! Gates premium page content on the session state. The decision is a pure
//! function of the current session signal, re-evaluated on every render:
//! unauthenticated visitors get the login wall carrying the requested
//! feature label, authenticated visitors get the wrapped page unmodified.
//! There is no loading state; flipping the session flips the view.

use crate::components::icons::{ArrowRight, Lock, User};
use crate::session::use_session;
use crate::web::route::{AppRoute, RouteAccess};
use crate::web::router::Link;
use leptos::prelude::*;

/// Wraps premium page content; substitutes [`LoginRequired`] while the
/// session is unauthenticated.
#[component]
pub fn Protected(
    /// Route being guarded; provides the feature label for the login wall.
    route: AppRoute,
    /// Page content to render once unlocked.
    children: ChildrenFn,
) -> impl IntoView {
    let session = use_session();

    move || match RouteAccess::resolve(route, session.is_authenticated.get()) {
        RouteAccess::Granted => children().into_any(),
        RouteAccess::Locked { feature } => {
            crate::web::console_log(&format!("[Guard] {feature} is locked for guests."));
            view! { <LoginRequired feature=feature /> }.into_any()
        }
    }
}

/// Login wall shown in place of premium content.
#[component]
pub fn LoginRequired(
    /// Label of the premium feature the visitor tried to reach.
    feature: &'static str,
) -> impl IntoView {
    view! {
        <div class="login-required min-h-screen flex items-center justify-center">
            <div class="card w-full max-w-md shadow-2xl bg-white/95">
                <div class="card-header text-center">
                    <div class="icon-badge bg-yellow-500">
                        <Lock attr:class="w-10 h-10 text-white" />
                    </div>
                    <h1 class="text-3xl font-bold">"Login Required"</h1>
                    <p>"Access to " {feature} " requires authentication"</p>
                </div>
                <div class="card-body space-y-6 text-center">
                    <div class="callout bg-yellow-50 border-yellow-200">
                        <User attr:class="w-5 h-5 text-yellow-600" />
                        <span class="text-sm font-medium">"Premium Feature"</span>
                    </div>

                    <p class="text-gray-600">
                        "To access " {feature}
                        " and other advanced farming tools, please sign up or log in to your SOMA account."
                    </p>

                    <div class="space-y-4">
                        <Link to="/signup" class="btn btn-primary w-full">
                            "Create Account"
                        </Link>
                        <Link to="/login" class="btn btn-outline w-full">
                            "Sign In"
                            <ArrowRight attr:class="w-4 h-4 ml-2" />
                        </Link>
                    </div>

                    <div class="pt-4 border-t">
                        <Link to="/" class="text-sm link">
                            "← Back to Homepage"
                        </Link>
                    </div>
                </div>
            </div>
        </div>
    }
}
