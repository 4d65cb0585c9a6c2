//! Carbon credit tracking (premium).

use crate::components::stat_card::StatCard;
use leptos::prelude::*;

#[component]
pub fn CarbonCreditsPage() -> impl IntoView {
    view! {
        <div class="carbon-credits max-w-7xl mx-auto px-4 py-12">
            <h1 class="text-3xl font-bold text-gray-900 mb-8">"Carbon Credits"</h1>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <StatCard label="Credits Earned" value="24" trend="+3 this quarter" />
                <StatCard label="Pending Verification" value="6" />
                <StatCard label="Estimated Value" value="$1,920" trend="at $80/credit" />
            </div>

            <p class="text-gray-600 mt-8">
                "Verification for the no-till block is scheduled for next month. Keep \
                 practice logs up to date to avoid delays."
            </p>
        </div>
    }
}
