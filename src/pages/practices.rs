//! Regenerative practices tracker (premium).

use leptos::prelude::*;

struct Practice {
    name: &'static str,
    status: &'static str,
    note: &'static str,
}

const PRACTICES: &[Practice] = &[
    Practice {
        name: "Cover Cropping",
        status: "Active",
        note: "Winter rye on fields 2-5 since October.",
    },
    Practice {
        name: "No-Till",
        status: "Active",
        note: "Third consecutive season across the farm.",
    },
    Practice {
        name: "Rotational Grazing",
        status: "Planned",
        note: "Paddock layout drafted for spring.",
    },
    Practice {
        name: "Compost Application",
        status: "Active",
        note: "12 t/ha applied to the orchard block.",
    },
];

#[component]
pub fn PracticesPage() -> impl IntoView {
    view! {
        <div class="practices max-w-7xl mx-auto px-4 py-12">
            <h1 class="text-3xl font-bold text-gray-900 mb-8">"Regenerative Practices"</h1>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                {PRACTICES
                    .iter()
                    .map(|practice| {
                        view! {
                            <div class="practice-card bg-white rounded-xl shadow p-6">
                                <div class="flex items-center justify-between">
                                    <h3 class="text-lg font-bold">{practice.name}</h3>
                                    <span class="badge badge-green">{practice.status}</span>
                                </div>
                                <p class="text-gray-600 mt-2">{practice.note}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
