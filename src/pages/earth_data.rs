//! NASA earth data browser (open).

use crate::components::data_quality::{DataQualityIndicator, DataQualityScore, SourceStatus};
use crate::components::image_card::ImageCard;
use leptos::prelude::*;

#[component]
pub fn EarthDataPage() -> impl IntoView {
    let quality = DataQualityScore {
        freshness: 3,
        consistency: 4,
        accuracy: 4,
        overall: 3,
    };

    view! {
        <div class="earth-data max-w-7xl mx-auto px-4 py-12">
            <div class="flex items-center justify-between mb-8">
                <h1 class="text-3xl font-bold text-gray-900">"Earth Data"</h1>
                <DataQualityIndicator
                    quality=quality
                    status=SourceStatus::Cached
                    source="NASA Earth Observatory"
                    age_minutes=300u64
                />
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                <ImageCard
                    src="/images/ndvi.jpg"
                    title="Vegetation Index (NDVI)"
                    caption="Regional greenness over the last 16 days."
                />
                <ImageCard
                    src="/images/soil-moisture.jpg"
                    title="Soil Moisture"
                    caption="SMAP surface moisture, 9 km resolution."
                />
            </div>
        </div>
    }
}
