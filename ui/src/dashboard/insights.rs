use dioxus::prelude::*;

use crate::core::format::{format_count, format_percent, format_signed_percent, pct_change};
use crate::data::{DashboardData, Period};

/// Headline findings computed from the fetched aggregates.
#[component]
pub fn KeyInsights(data: DashboardData) -> Element {
    let avg = |period: Period| data.period_stat(period).map(|s| s.avg_rating).unwrap_or(0.0);
    let pre = avg(Period::PreConstruction);
    let during = avg(Period::DuringConstruction);
    let post = avg(Period::PostConstruction);

    let cards = [
        (
            "Construction Impact",
            format_signed_percent(pct_change(pre, during)),
            "dash-insight__icon--dip",
        ),
        (
            "Post-Renovation",
            format_signed_percent(pct_change(during, post)),
            "dash-insight__icon--rise",
        ),
        (
            "Overall Gain",
            format_percent(pct_change(pre, post)),
            "dash-insight__icon--award",
        ),
        (
            "Reviews Analyzed",
            format!("{}+", format_count(data.total_reviews())),
            "dash-insight__icon--bulb",
        ),
    ];

    rsx! {
        section { class: "dash-card dash-insights",
            div { class: "dash-card__header",
                h2 { {crate::t!("section-insights-title")} }
            }

            div { class: "dash-insights__grid",
                for (title, highlight, icon_class) in cards {
                    div { class: "dash-insight",
                        span { class: "dash-insight__icon {icon_class}", aria_hidden: "true" }
                        strong { class: "dash-insight__value", "{highlight}" }
                        span { class: "dash-insight__title", "{title}" }
                    }
                }
            }
        }
    }
}
