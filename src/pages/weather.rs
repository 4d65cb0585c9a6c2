//! Weather conditions (open).

use crate::components::data_quality::{DataQualityIndicator, DataQualityScore, SourceStatus};
use crate::components::stat_card::StatCard;
use leptos::prelude::*;

#[component]
pub fn WeatherPage() -> impl IntoView {
    let quality = DataQualityScore {
        freshness: 5,
        consistency: 5,
        accuracy: 4,
        overall: 5,
    };

    view! {
        <div class="weather max-w-7xl mx-auto px-4 py-12">
            <div class="flex items-center justify-between mb-8">
                <h1 class="text-3xl font-bold text-gray-900">"Weather"</h1>
                <DataQualityIndicator
                    quality=quality
                    status=SourceStatus::Live
                    source="Open-Meteo"
                    age_minutes=0u64
                />
            </div>

            <div class="grid grid-cols-1 md:grid-cols-4 gap-6">
                <StatCard label="Temperature" value="21°C" />
                <StatCard label="Humidity" value="64%" />
                <StatCard label="Wind" value="14 km/h NW" />
                <StatCard label="Rain (next 24h)" value="6 mm" trend="70% chance" />
            </div>
        </div>
    }
}
