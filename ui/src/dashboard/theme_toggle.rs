use dioxus::prelude::*;

use crate::core::theme::{self, Theme};

/// Floating dark/light switch. The active theme lives in a context
/// signal provided by the launcher shell; flipping it swaps the root
/// CSS class and persists the preference.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme_signal = use_context::<Signal<Theme>>();
    let current = theme_signal();

    let glyph = if current.is_dark() { "☀" } else { "☾" };
    let label = if current.is_dark() {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    };

    rsx! {
        button {
            r#type: "button",
            class: "theme-toggle",
            aria_label: "{label}",
            onclick: move |_| {
                let next = theme_signal().toggled();
                theme::store_preference(next);
                theme_signal.set(next);
            },
            span { class: "theme-toggle__glyph", aria_hidden: "true", "{glyph}" }
        }
    }
}
