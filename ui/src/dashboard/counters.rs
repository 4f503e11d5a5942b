use dioxus::prelude::*;

use crate::core::format::{format_signed_percent, pct_change};
use crate::core::timing::{self, FRAME_MS};
use crate::data::{DashboardData, Period};

/// Four animated stat tiles: the three phase averages plus the overall
/// improvement. Trend markers are computed from the fetched averages,
/// not hard-coded.
#[component]
pub fn StatsCounter(data: DashboardData) -> Element {
    let avg = |period: Period| data.period_stat(period).map(|s| s.avg_rating).unwrap_or(0.0);
    let pre = avg(Period::PreConstruction);
    let during = avg(Period::DuringConstruction);
    let post = avg(Period::PostConstruction);

    let tiles = [
        Tile {
            target: pre,
            decimals: 2,
            suffix: "",
            label: "Pre-Construction Rating",
            trend: Trend::Flat("Baseline"),
        },
        Tile {
            target: during,
            decimals: 2,
            suffix: "",
            label: "During Construction",
            trend: Trend::Down(format_signed_percent(pct_change(pre, during))),
        },
        Tile {
            target: post,
            decimals: 2,
            suffix: "",
            label: "Post-Construction",
            trend: Trend::Up(format_signed_percent(pct_change(during, post))),
        },
        Tile {
            target: pct_change(pre, post),
            decimals: 1,
            suffix: "%",
            label: "Overall Improvement",
            trend: Trend::Up("vs. Pre-Construction".to_string()),
        },
    ];

    rsx! {
        div { class: "dash-counters",
            for tile in tiles {
                StatTile {
                    target: tile.target,
                    decimals: tile.decimals,
                    suffix: tile.suffix.to_string(),
                    label: tile.label.to_string(),
                    trend: tile.trend,
                }
            }
        }
    }
}

struct Tile {
    target: f64,
    decimals: usize,
    suffix: &'static str,
    label: &'static str,
    trend: Trend,
}

#[derive(Debug, Clone, PartialEq)]
enum Trend {
    Up(String),
    Down(String),
    Flat(&'static str),
}

impl Trend {
    fn css_class(&self) -> &'static str {
        match self {
            Trend::Up(_) => "dash-counter__trend--up",
            Trend::Down(_) => "dash-counter__trend--down",
            Trend::Flat(_) => "dash-counter__trend--flat",
        }
    }

    fn glyph(&self) -> &'static str {
        match self {
            Trend::Up(_) => "▲",
            Trend::Down(_) => "▼",
            Trend::Flat(_) => "—",
        }
    }

    fn text(&self) -> String {
        match self {
            Trend::Up(s) | Trend::Down(s) => s.clone(),
            Trend::Flat(s) => s.to_string(),
        }
    }
}

/// One tile with a count-up animation from zero to its target.
#[component]
fn StatTile(target: f64, decimals: usize, suffix: String, label: String, trend: Trend) -> Element {
    let mut shown = use_signal(|| 0.0f64);

    use_hook(move || {
        spawn(async move {
            const STEPS: u32 = 45;
            for step in 1..=STEPS {
                timing::sleep_ms(FRAME_MS).await;
                let t = step as f64 / STEPS as f64;
                // Ease-out cubic: fast start, gentle landing.
                let eased = 1.0 - (1.0 - t).powi(3);
                shown.set(target * eased);
            }
            shown.set(target);
        });
    });

    let value = format!("{:.*}{}", decimals, shown(), suffix);

    rsx! {
        div { class: "dash-counter",
            div { class: "dash-counter__head",
                span { class: "dash-counter__trend {trend.css_class()}",
                    span { aria_hidden: "true", "{trend.glyph()} " }
                    "{trend.text()}"
                }
            }
            strong { class: "dash-counter__value", "{value}" }
            span { class: "dash-counter__label", "{label}" }
        }
    }
}
