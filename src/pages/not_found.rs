//! Fallback page for unmatched paths.

use crate::web::router::Link;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found flex items-center justify-center min-h-screen">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300">"404"</h1>
                <p class="text-xl text-gray-700 mt-4">"Page not found"</p>
                <p class="text-gray-500 mt-2">
                    "The page you are looking for does not exist or has moved."
                </p>
                <Link to="/" class="btn btn-primary mt-6 inline-flex">
                    "Back to Homepage"
                </Link>
            </div>
        </div>
    }
}
