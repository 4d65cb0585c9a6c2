//! Site footer: brand blurb, social links and two link columns.

use crate::components::icons::Leaf;
use crate::web::router::Link;
use leptos::prelude::*;

struct FooterColumn {
    heading: &'static str,
    links: &'static [(&'static str, &'static str)],
}

const COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        heading: "Platform",
        links: &[
            ("/dashboard", "Dashboard"),
            ("/soil-health", "Soil Health"),
            ("/carbon-credits", "Carbon Credits"),
            ("/reports", "Reports"),
        ],
    },
    FooterColumn {
        heading: "Company",
        links: &[
            ("/about", "About"),
            ("/contact", "Contact"),
            ("/privacy", "Privacy Policy"),
            ("/terms", "Terms of Service"),
        ],
    },
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer bg-gray-900 text-white py-12">
            <div class="max-w-7xl mx-auto px-4 grid grid-cols-1 md:grid-cols-4 gap-8">
                <div class="col-span-1 md:col-span-2">
                    <div class="flex items-center space-x-2 mb-4">
                        <Leaf attr:class="w-6 h-6 text-green-500" />
                        <span class="text-2xl font-bold">"Soma"</span>
                    </div>
                    <p class="text-gray-300 mb-4 max-w-md">
                        "Empowering farmers with AI-driven insights for sustainable agriculture. \
                         Growing smarter, greener, together."
                    </p>
                </div>
                {COLUMNS
                    .iter()
                    .map(|column| {
                        view! {
                            <div>
                                <h4 class="font-semibold mb-4">{column.heading}</h4>
                                <ul class="space-y-2 text-gray-300">
                                    {column
                                        .links
                                        .iter()
                                        .map(|(path, label)| {
                                            view! {
                                                <li>
                                                    <Link to=*path class="footer-link">
                                                        {*label}
                                                    </Link>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="max-w-7xl mx-auto px-4 mt-8 pt-8 border-t border-gray-800 text-gray-400 text-sm">
                "© 2025 Soma. All rights reserved."
            </div>
        </footer>
    }
}
