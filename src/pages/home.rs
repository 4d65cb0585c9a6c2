//! Public landing page.

use crate::components::icons::ArrowRight;
use crate::components::image_card::ImageCard;
use crate::web::router::Link;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <section class="hero text-center py-24 px-4">
                <h1 class="text-5xl font-bold text-gray-900">
                    "Grow smarter. Farm greener."
                </h1>
                <p class="text-xl text-gray-600 mt-4 max-w-2xl mx-auto">
                    "SOMA turns satellite, weather and soil data into practical \
                     sustainability insights for your farm."
                </p>
                <div class="mt-8 flex items-center justify-center gap-4">
                    <Link to="/signup" class="btn btn-primary btn-lg">
                        "Get Started"
                        <ArrowRight attr:class="w-4 h-4 ml-2" />
                    </Link>
                    <Link to="/earth-data" class="btn btn-outline btn-lg">
                        "Explore Earth Data"
                    </Link>
                </div>
            </section>

            <section class="max-w-7xl mx-auto px-4 py-12 grid grid-cols-1 md:grid-cols-3 gap-8">
                <ImageCard
                    src="/images/fields.jpg"
                    title="Soil Health"
                    caption="Track organic matter, pH and nutrients season over season."
                />
                <ImageCard
                    src="/images/irrigation.jpg"
                    title="Water Usage"
                    caption="See irrigation efficiency and rainfall capture at a glance."
                />
                <ImageCard
                    src="/images/forest.jpg"
                    title="Carbon Credits"
                    caption="Turn regenerative practices into verified carbon income."
                />
            </section>
        </div>
    }
}
