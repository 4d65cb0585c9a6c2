//! Image card used by the content pages.

use leptos::prelude::*;

/// Full-bleed image with a title and caption overlay.
#[component]
pub fn ImageCard(
    #[prop(into)] src: String,
    #[prop(into)] title: String,
    #[prop(optional, into)] caption: String,
) -> impl IntoView {
    let caption = (!caption.is_empty())
        .then(|| view! { <p class="text-sm text-gray-200">{caption.clone()}</p> });

    view! {
        <div class="image-card relative rounded-xl overflow-hidden shadow-xl">
            <img src=src alt=title.clone() class="w-full h-64 object-cover" />
            <div class="image-card-overlay absolute inset-x-0 bottom-0 p-4 bg-gradient-to-t from-black/70">
                <h3 class="text-lg font-bold text-white">{title}</h3>
                {caption}
            </div>
        </div>
    }
}
