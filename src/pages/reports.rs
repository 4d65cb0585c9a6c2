//! Sustainability reports (premium).

use leptos::prelude::*;

struct Report {
    title: &'static str,
    period: &'static str,
    summary: &'static str,
}

const REPORTS: &[Report] = &[
    Report {
        title: "Q2 Sustainability Report",
        period: "Apr - Jun 2025",
        summary: "Overall score up 4 points, driven by water efficiency gains.",
    },
    Report {
        title: "Q1 Sustainability Report",
        period: "Jan - Mar 2025",
        summary: "Soil organic matter trending up; fuel use flat.",
    },
    Report {
        title: "2024 Annual Review",
        period: "Full year 2024",
        summary: "First verified carbon credits issued; baseline established.",
    },
];

#[component]
pub fn ReportsPage() -> impl IntoView {
    view! {
        <div class="reports max-w-7xl mx-auto px-4 py-12">
            <h1 class="text-3xl font-bold text-gray-900 mb-8">"Reports"</h1>

            <div class="space-y-4">
                {REPORTS
                    .iter()
                    .map(|report| {
                        view! {
                            <div class="report-row bg-white rounded-xl shadow p-6">
                                <div class="flex items-center justify-between">
                                    <h3 class="text-lg font-bold">{report.title}</h3>
                                    <span class="text-sm text-gray-500">{report.period}</span>
                                </div>
                                <p class="text-gray-600 mt-2">{report.summary}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
