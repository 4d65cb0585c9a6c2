//! Air quality conditions (open).

use crate::components::stat_card::StatCard;
use leptos::prelude::*;

#[component]
pub fn AirQualityPage() -> impl IntoView {
    view! {
        <div class="air-quality max-w-7xl mx-auto px-4 py-12">
            <h1 class="text-3xl font-bold text-gray-900 mb-8">"Air Quality"</h1>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <StatCard label="AQI" value="42" trend="Good" />
                <StatCard label="PM2.5" value="9 µg/m³" />
                <StatCard label="Ozone" value="31 ppb" />
            </div>

            <p class="text-gray-600 mt-8">
                "Conditions are good for field work. No burn advisories in effect."
            </p>
        </div>
    }
}
