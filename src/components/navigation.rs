//! Top navigation bar.
//!
//! Shows the public page set to guests and the premium page set to signed-in
//! visitors, plus the login/signup buttons or the profile name with a
//! logout button.

use crate::components::icons::{Close, Leaf, Menu};
use crate::session::{logout, use_session};
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;

#[component]
pub fn Navigation() -> impl IntoView {
    let session = use_session();
    let router = use_router();
    let (mobile_open, set_mobile_open) = signal(false);

    let nav_items = move || {
        if session.is_authenticated.get() {
            AppRoute::PRIVATE_NAV
        } else {
            AppRoute::PUBLIC_NAV
        }
    };

    let on_logout = move |_| {
        logout(&session);
        router.navigate("/");
    };

    view! {
        <nav class="navbar fixed top-0 w-full bg-white shadow-lg z-50">
            <div class="navbar-inner max-w-7xl mx-auto px-4">
                <Link to="/" class="brand flex items-center space-x-2">
                    <Leaf attr:class="w-8 h-8 text-green-600" />
                    <span class="text-2xl font-bold">"SOMA"</span>
                </Link>

                <div class="nav-links hidden md:flex items-center space-x-8">
                    <For
                        each=move || nav_items().iter().copied()
                        key=|route| route.to_path()
                        children=move |route: AppRoute| {
                            view! {
                                <Link to=route.to_path() class="nav-link">
                                    {route.feature_name()}
                                </Link>
                            }
                        }
                    />
                </div>

                <div class="nav-actions hidden md:flex items-center space-x-4">
                    <Show
                        when=move || session.is_authenticated.get()
                        fallback=|| {
                            view! {
                                <Link to="/login" class="btn btn-ghost">
                                    "Sign In"
                                </Link>
                                <Link to="/signup" class="btn btn-primary">
                                    "Sign Up"
                                </Link>
                            }
                        }
                    >
                        <span class="text-sm text-gray-700">
                            {move || {
                                session.profile.get().map(|p| p.name).unwrap_or_default()
                            }}
                        </span>
                        <button class="btn btn-outline" on:click=on_logout>
                            "Logout"
                        </button>
                    </Show>
                </div>

                <button
                    class="mobile-toggle md:hidden"
                    on:click=move |_| set_mobile_open.update(|open| *open = !*open)
                >
                    <Show
                        when=move || mobile_open.get()
                        fallback=|| view! { <Menu attr:class="w-6 h-6" /> }
                    >
                        <Close attr:class="w-6 h-6" />
                    </Show>
                </button>
            </div>

            <Show when=move || mobile_open.get()>
                <div class="mobile-menu md:hidden px-4 pb-4 space-y-2">
                    <For
                        each=move || nav_items().iter().copied()
                        key=|route| route.to_path()
                        children=move |route: AppRoute| {
                            view! {
                                <Link to=route.to_path() class="nav-link block">
                                    {route.feature_name()}
                                </Link>
                            }
                        }
                    />
                    <Show
                        when=move || session.is_authenticated.get()
                        fallback=|| {
                            view! {
                                <Link to="/login" class="nav-link block">
                                    "Sign In"
                                </Link>
                                <Link to="/signup" class="nav-link block">
                                    "Sign Up"
                                </Link>
                            }
                        }
                    >
                        <button class="btn btn-outline w-full" on:click=on_logout>
                            "Logout"
                        </button>
                    </Show>
                </div>
            </Show>
        </nav>
    }
}
