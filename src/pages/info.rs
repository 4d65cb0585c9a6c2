//! Informational pages: about, contact, privacy, terms.

use leptos::prelude::*;

#[component]
fn InfoShell(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="info-page max-w-3xl mx-auto px-4 py-12">
            <h1 class="text-3xl font-bold text-gray-900 mb-6">{title}</h1>
            <div class="prose text-gray-700 space-y-4">{children()}</div>
        </div>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <InfoShell title="About SOMA">
            <p>
                "SOMA helps farmers see the environmental state of their land in one \
                 place: soil, water, weather and carbon, side by side."
            </p>
            <p>
                "We combine public satellite data with on-farm records to make \
                 regenerative agriculture measurable and rewarding."
            </p>
        </InfoShell>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <InfoShell title="Contact">
            <p>"Questions, feedback or partnership ideas? We would love to hear from you."</p>
            <p>
                "Email us at "
                <a href="mailto:hello@soma.earth" class="link">
                    "hello@soma.earth"
                </a> " and we will get back to you within two working days."
            </p>
        </InfoShell>
    }
}

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <InfoShell title="Privacy Policy">
            <p>
                "Your farm data belongs to you. We store only what is needed to render \
                 your dashboard and never sell personal information."
            </p>
            <p>
                "Session data is kept locally in your browser; deleting it signs you \
                 out and removes the stored profile."
            </p>
        </InfoShell>
    }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <InfoShell title="Terms of Service">
            <p>
                "SOMA insights are decision support, not agronomic advice. Verify \
                 critical decisions against local conditions."
            </p>
            <p>"By using the service you agree to our fair-use and data policies."</p>
        </InfoShell>
    }
}
