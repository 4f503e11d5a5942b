use dioxus::prelude::*;

use crate::core::format::format_rating_stars;
use crate::data::{DashboardData, Period};

const BEFORE_IMG: Asset = asset!("/assets/images/park-before.svg");
const AFTER_IMG: Asset = asset!("/assets/images/park-after.svg");

/// Drag slider revealing the post-renovation plaza over the
/// pre-renovation one. The handle is a full-height range input, so
/// mouse, touch, and keyboard all work without any pixel math.
#[component]
pub fn BeforeAfterComparison(data: DashboardData) -> Element {
    let mut position = use_signal(|| 50.0f64);

    let before_rating = data
        .period_stat(Period::PreConstruction)
        .map(|s| s.avg_rating)
        .unwrap_or(0.0);
    let after_rating = data
        .period_stat(Period::PostConstruction)
        .map(|s| s.avg_rating)
        .unwrap_or(0.0);

    // Fade each caption out as the slider crowds it.
    let before_opacity = if position() > 70.0 { 0.0 } else { 1.0 };
    let after_opacity = if position() < 30.0 { 0.0 } else { 1.0 };

    rsx! {
        section { class: "dash-card dash-compare",
            div { class: "dash-card__header dash-card__header--centered",
                h2 { {crate::t!("section-before-after-title")} }
                p { class: "dash-card__sub", {crate::t!("section-before-after-hint")} }
            }

            div { class: "dash-compare__stage",
                div { class: "dash-compare__layer",
                    img { class: "dash-compare__image", src: BEFORE_IMG, alt: "LOVE Park before renovation" }
                    div {
                        class: "dash-compare__caption",
                        style: "opacity:{before_opacity};",
                        h3 { "PRE-CONSTRUCTION" }
                        p { "Before 2016" }
                        span { class: "dash-compare__rating", "Average Rating: {format_rating_stars(before_rating)}" }
                    }
                }

                div {
                    class: "dash-compare__layer dash-compare__layer--after",
                    style: "clip-path: inset(0 0 0 {position()}%);",
                    img { class: "dash-compare__image", src: AFTER_IMG, alt: "LOVE Park after renovation" }
                    div {
                        class: "dash-compare__caption",
                        style: "opacity:{after_opacity};",
                        h3 { "POST-CONSTRUCTION" }
                        p { "Reopened May 2018" }
                        span { class: "dash-compare__rating", "Average Rating: {format_rating_stars(after_rating)}" }
                    }
                }

                div {
                    class: "dash-compare__divider",
                    style: "left:{position()}%;",
                    aria_hidden: "true",
                    span { class: "dash-compare__handle", "⇄" }
                }

                input {
                    class: "dash-compare__slider",
                    r#type: "range",
                    min: "0",
                    max: "100",
                    step: "0.5",
                    value: "{position()}",
                    aria_label: "Before and after comparison slider",
                    oninput: move |evt| {
                        if let Ok(value) = evt.value().parse::<f64>() {
                            position.set(value.clamp(0.0, 100.0));
                        }
                    },
                }
            }
        }
    }
}
