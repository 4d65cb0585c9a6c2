//! Soil health metrics (premium).

use crate::components::data_quality::{DataQualityIndicator, DataQualityScore, SourceStatus};
use crate::components::stat_card::StatCard;
use leptos::prelude::*;

#[component]
pub fn SoilHealthPage() -> impl IntoView {
    let quality = DataQualityScore {
        freshness: 4,
        consistency: 4,
        accuracy: 5,
        overall: 4,
    };

    view! {
        <div class="soil-health max-w-7xl mx-auto px-4 py-12">
            <div class="flex items-center justify-between mb-8">
                <h1 class="text-3xl font-bold text-gray-900">"Soil Health"</h1>
                <DataQualityIndicator
                    quality=quality
                    status=SourceStatus::Cached
                    source="Lab panel + in-field probes"
                    age_minutes=180u64
                />
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <StatCard label="pH" value="6.4" trend="stable" />
                <StatCard label="Organic Matter" value="4.1%" trend="+0.3% this season" />
                <StatCard label="Nitrogen" value="32 ppm" trend="+4 ppm" />
                <StatCard label="Phosphorus" value="18 ppm" />
                <StatCard label="Potassium" value="142 ppm" />
                <StatCard label="Microbial Activity" value="High" trend="improving" />
            </div>
        </div>
    }
}
