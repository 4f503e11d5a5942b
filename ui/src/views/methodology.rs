use dioxus::prelude::*;

use crate::dashboard::MethodologySteps;

#[component]
pub fn Methodology() -> Element {
    // Re-render when the locale changes elsewhere (e.g. from the navbar).
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-methodology",
            MethodologySteps {}

            div { class: "dash-card dash-method__notes",
                h3 { "Data notes" }
                p {
                    "Review rows live in a managed Postgres store with public read-only "
                    "access; the dashboard recomputes every aggregate fresh on each visit."
                }
                p {
                    "Google Maps and Yelp figures are deterministic placeholders derived "
                    "from the TripAdvisor series and will be replaced as those datasets "
                    "are collected."
                }
            }
        }
    }
}
