use dioxus::prelude::*;

use crate::core::config::ConfigError;
use crate::dashboard::{
    BeforeAfterComparison, ComparisonMode, Hero, InteractiveCharts, KeyInsights, StatsCounter,
};
use crate::data::{DashboardSource, DashboardState};

/// The dashboard page. This is the only component that performs I/O:
/// one fetch on first display, no refresh. Everything below it receives
/// the result as plain props.
#[component]
pub fn Home() -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    // The launcher provides the resolved source; a config failure never
    // reaches this view (the router is replaced by the error screen),
    // but surface it as a failed state rather than assuming.
    let source = use_context::<Result<DashboardSource, ConfigError>>();
    let state = use_resource(move || {
        let source = source.clone();
        async move {
            match source {
                Ok(source) => DashboardState::load(source).await,
                Err(err) => DashboardState {
                    data: None,
                    error: Some(err.to_string()),
                },
            }
        }
    });

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-home",
            Hero {}

            div { class: "page-home__sections",
                match state.read().as_ref() {
                    None => rsx! {
                        div { class: "dash-card dash-card--placeholder",
                            p { {crate::t!("home-loading")} }
                        }
                    },
                    Some(DashboardState { data: Some(data), .. }) => rsx! {
                        StatsCounter { data: data.clone() }
                        InteractiveCharts { data: data.clone() }
                        KeyInsights { data: data.clone() }
                        BeforeAfterComparison { data: data.clone() }
                        ComparisonMode {}
                    },
                    Some(DashboardState { error, .. }) => rsx! {
                        div { class: "dash-card dash-card--error",
                            h2 { {crate::t!("home-error-title")} }
                            p { { error.clone().unwrap_or_default() } }
                        }
                    },
                }
            }

            footer { class: "page-home__footer",
                p { {crate::t!("footer-built")} }
            }
        }
    }
}
