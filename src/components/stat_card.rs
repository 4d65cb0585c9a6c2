//! Metric card used across the premium pages.

use leptos::prelude::*;

/// Single headline metric with an optional trend line underneath.
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(optional, into)] trend: String,
) -> impl IntoView {
    let trend = (!trend.is_empty())
        .then(|| view! { <p class="text-sm text-green-600 mt-1">{trend.clone()}</p> });

    view! {
        <div class="stat-card bg-white rounded-xl shadow p-6">
            <p class="text-sm text-gray-500">{label}</p>
            <p class="text-3xl font-bold text-gray-900 mt-2">{value}</p>
            {trend}
        </div>
    }
}
