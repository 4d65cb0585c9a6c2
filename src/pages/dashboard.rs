//! Farm overview dashboard (premium).

use crate::components::data_quality::{DataQualityIndicator, DataQualityScore, SourceStatus};
use crate::components::stat_card::StatCard;
use crate::session::use_session;
use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();

    let quality = DataQualityScore {
        freshness: 5,
        consistency: 4,
        accuracy: 4,
        overall: 4,
    };

    let greeting = move || {
        session
            .profile
            .get()
            .map(|p| format!("Welcome back, {}", p.name))
            .unwrap_or_else(|| "Welcome back".to_string())
    };

    view! {
        <div class="dashboard max-w-7xl mx-auto px-4 py-12">
            <div class="flex items-center justify-between mb-8">
                <div>
                    <h1 class="text-3xl font-bold text-gray-900">{greeting}</h1>
                    <p class="text-gray-600">"Here is how your farm is doing this week."</p>
                </div>
                <DataQualityIndicator
                    quality=quality
                    status=SourceStatus::Live
                    source="SOMA field sensors"
                    age_minutes=8u64
                />
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                <StatCard label="Sustainability Score" value="82 / 100" trend="+4 vs last month" />
                <StatCard label="Soil Organic Matter" value="4.1%" trend="+0.3% this season" />
                <StatCard label="Water Efficiency" value="78%" trend="+6% vs last season" />
                <StatCard label="Carbon Sequestered" value="12.4 t" trend="+1.8 t this quarter" />
            </div>
        </div>
    }
}
