use dioxus::prelude::*;

/// Multi-landmark comparison teaser. The feature needs datasets for the
/// other plazas before it can ship, so this stays a stub: a card that
/// opens a modal describing what's coming.
#[component]
pub fn ComparisonMode() -> Element {
    let mut show_modal = use_signal(|| false);

    rsx! {
        section { class: "dash-card dash-comparison",
            div { class: "dash-comparison__teaser",
                span { class: "dash-comparison__icon", aria_hidden: "true" }
                h3 { "Compare Multiple Landmarks" }
                p {
                    "Want to compare LOVE Park's construction impact with other Philadelphia landmarks? "
                    "This feature is currently under development."
                }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: move |_| show_modal.set(true),
                    "Preview Feature"
                }
            }

            if show_modal() {
                div {
                    class: "modal__backdrop",
                    onclick: move |_| show_modal.set(false),
                }
                div { class: "modal", role: "dialog", aria_label: "Comparison mode preview",
                    button {
                        r#type: "button",
                        class: "modal__close",
                        aria_label: "Close",
                        onclick: move |_| show_modal.set(false),
                        "×"
                    }

                    h2 { "Feature In Development" }
                    p { "Comparison Mode will allow you to:" }

                    ul { class: "modal__list",
                        li {
                            strong { "Compare multiple landmarks" }
                            " side-by-side (e.g. Rittenhouse Square, Logan Circle, Independence Mall)"
                        }
                        li {
                            strong { "Analyze construction impacts" }
                            " across different Philadelphia locations"
                        }
                        li {
                            strong { "View synchronized timelines" }
                            " showing how different projects affected visitor sentiment"
                        }
                        li {
                            strong { "Generate comparative reports" }
                            " for urban planning insights"
                        }
                    }

                    p { class: "modal__note",
                        strong { "Coming soon! " }
                        "This feature requires additional data collection across multiple landmarks."
                    }

                    button {
                        r#type: "button",
                        class: "button",
                        onclick: move |_| show_modal.set(false),
                        "Got it"
                    }
                }
            }
        }
    }
}
