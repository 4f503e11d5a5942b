use dioxus::prelude::*;

/// Full-page screen shown instead of the router when the store
/// connection settings are missing. Nothing else initializes.
#[component]
pub fn ConfigErrorScreen(message: String) -> Element {
    rsx! {
        section { class: "page page-config-error",
            div { class: "dash-card dash-card--error",
                h1 { {crate::t!("config-error-title")} }
                p { "{message}" }
                p { class: "dash-card__sub", {crate::t!("config-error-hint")} }
            }
        }
    }
}
