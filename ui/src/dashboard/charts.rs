use dioxus::prelude::*;

use crate::core::format::format_rating;
use crate::data::{DashboardData, TimelinePoint, VolumeByPlatform};

use super::svg::{polyline_points, ticks, volume_axis_max, ChartFrame};

/// Quarter keys bracketing the construction window, shaded on the
/// timeline chart.
const CONSTRUCTION_START: &str = "2016Q1";
const CONSTRUCTION_END: &str = "2018Q2";

const RATING_AXIS_MAX: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChartTab {
    Ratings,
    Timeline,
    Volume,
}

impl ChartTab {
    const ALL: [ChartTab; 3] = [ChartTab::Ratings, ChartTab::Timeline, ChartTab::Volume];

    fn name(self) -> &'static str {
        match self {
            ChartTab::Ratings => "Ratings by Period",
            ChartTab::Timeline => "Rating Timeline",
            ChartTab::Volume => "Review Volume",
        }
    }

    fn description(self) -> &'static str {
        match self {
            ChartTab::Ratings => "Average ratings across construction phases",
            ChartTab::Timeline => "Rating trends over time",
            ChartTab::Volume => "Number of reviews by platform",
        }
    }
}

/// Tabbed chart host. Receives the fetched dashboard data; performs no
/// I/O of its own.
#[component]
pub fn InteractiveCharts(data: DashboardData) -> Element {
    let mut active = use_signal(|| ChartTab::Timeline);

    rsx! {
        section { class: "dash-card dash-charts",
            div { class: "dash-card__header",
                h2 { {crate::t!("section-charts-title")} }
            }

            div { class: "dash-charts__tabs", role: "tablist",
                for tab in ChartTab::ALL {
                    button {
                        r#type: "button",
                        role: "tab",
                        class: format!(
                            "dash-charts__tab {}",
                            if active() == tab { "dash-charts__tab--active" } else { "" }
                        ),
                        onclick: move |_| active.set(tab),
                        span { class: "dash-charts__tab-name", "{tab.name()}" }
                        span { class: "dash-charts__tab-desc", "{tab.description()}" }
                    }
                }
            }

            div { class: "dash-charts__panel", role: "tabpanel",
                match active() {
                    ChartTab::Ratings => rsx! { RatingsBarChart { data: data.clone() } },
                    ChartTab::Timeline => rsx! { TimelineChart { points: data.multi_platform_timeline.clone() } },
                    ChartTab::Volume => rsx! { VolumeChart { volumes: data.review_volume_by_platform.clone() } },
                }
            }

            p { class: "dash-charts__hint", "Hover over marks for exact values" }
        }
    }
}

/// Precomputed bar geometry: shape the data first, render plain fields
/// after.
#[derive(Clone, PartialEq)]
struct BarShape {
    css_class: &'static str,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    tooltip: String,
}

#[derive(Clone, PartialEq)]
struct AxisLabel {
    x: f64,
    y: f64,
    text: String,
}

#[component]
fn RatingsBarChart(data: DashboardData) -> Element {
    let frame = ChartFrame::default();
    let count = data.ratings_by_period.len();
    let band = frame.plot_width() / count.max(1) as f64 * 0.5;

    let mut bars = Vec::with_capacity(count);
    let mut values = Vec::with_capacity(count);
    let mut labels = Vec::with_capacity(count);

    for (idx, stat) in data.ratings_by_period.iter().enumerate() {
        let center = frame.slot_center(idx, count);
        let top = frame.y_at(stat.avg_rating, 0.0, RATING_AXIS_MAX);
        bars.push(BarShape {
            css_class: "chart-bar chart-bar--tripadvisor",
            x: center - band / 2.0,
            y: top,
            width: band,
            height: frame.plot_bottom() - top,
            tooltip: format!(
                "{}: {} ({} reviews)",
                stat.period,
                format_rating(stat.avg_rating),
                stat.reviews
            ),
        });
        values.push(AxisLabel {
            x: center,
            y: top - 8.0,
            text: format_rating(stat.avg_rating),
        });
        labels.push(AxisLabel {
            x: center,
            y: frame.plot_bottom() + 24.0,
            text: stat.period.clone(),
        });
    }

    rsx! {
        svg {
            class: "chart",
            view_box: "0 0 {frame.width} {frame.height}",
            preserve_aspect_ratio: "xMidYMid meet",

            AxisGrid { frame, max: RATING_AXIS_MAX, tick_count: 6, decimals: 1 }
            Bars { bars }

            for label in values {
                text { class: "chart-value", x: "{label.x}", y: "{label.y}", text_anchor: "middle", "{label.text}" }
            }
            for label in labels {
                text { class: "chart-label", x: "{label.x}", y: "{label.y}", text_anchor: "middle", "{label.text}" }
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct DotShape {
    x: f64,
    y: f64,
    tooltip: String,
}

#[component]
fn TimelineChart(points: Vec<TimelinePoint>) -> Element {
    let frame = ChartFrame::default();
    let count = points.len();

    let series = |pick: fn(&TimelinePoint) -> f64| {
        let values: Vec<f64> = points.iter().map(pick).collect();
        polyline_points(&frame, &values, 0.0, RATING_AXIS_MAX)
    };
    let google = series(|p| p.google_rating);
    let yelp = series(|p| p.yelp_rating);
    let tripadvisor = series(|p| p.tripadvisor_rating);

    let x_of = |idx: usize| {
        if count <= 1 {
            frame.x_at(0.5)
        } else {
            frame.x_at(idx as f64 / (count - 1) as f64)
        }
    };

    let window = construction_window(&points).map(|(start, end)| {
        let x0 = x_of(start);
        let x1 = x_of(end);
        (x0, x1 - x0, (x0 + x1) / 2.0)
    });

    let mut dots = Vec::with_capacity(count);
    let mut labels = Vec::new();
    // Thin the x labels so long timelines stay legible.
    let label_every = (count / 10).max(1);
    for (idx, point) in points.iter().enumerate() {
        dots.push(DotShape {
            x: x_of(idx),
            y: frame.y_at(point.tripadvisor_rating, 0.0, RATING_AXIS_MAX),
            tooltip: format!(
                "{}: TripAdvisor {}",
                point.quarter,
                format_rating(point.tripadvisor_rating)
            ),
        });
        if idx % label_every == 0 {
            labels.push(AxisLabel {
                x: x_of(idx),
                y: frame.plot_bottom() + 20.0,
                text: point.quarter.clone(),
            });
        }
    }

    rsx! {
        svg {
            class: "chart",
            view_box: "0 0 {frame.width} {frame.height}",
            preserve_aspect_ratio: "xMidYMid meet",

            AxisGrid { frame, max: RATING_AXIS_MAX, tick_count: 6, decimals: 1 }

            if let Some((x, width, mid)) = window {
                rect {
                    class: "chart-window",
                    x: "{x}",
                    y: "{frame.margin_top}",
                    width: "{width}",
                    height: "{frame.plot_height()}",
                }
                text {
                    class: "chart-window__label",
                    x: "{mid}",
                    y: "{frame.margin_top - 8.0}",
                    text_anchor: "middle",
                    "Construction"
                }
            }

            polyline { class: "chart-line chart-line--google", points: "{google}" }
            polyline { class: "chart-line chart-line--yelp", points: "{yelp}" }
            polyline { class: "chart-line chart-line--tripadvisor", points: "{tripadvisor}" }

            for dot in dots {
                circle {
                    class: "chart-dot chart-dot--tripadvisor",
                    cx: "{dot.x}",
                    cy: "{dot.y}",
                    r: "3",
                    title { "{dot.tooltip}" }
                }
            }
            for label in labels {
                text {
                    class: "chart-label chart-label--tilted",
                    x: "{label.x}",
                    y: "{label.y}",
                    text_anchor: "end",
                    transform: "rotate(-45 {label.x} {label.y})",
                    "{label.text}"
                }
            }

            PlatformLegend { frame }
        }
    }
}

#[component]
fn VolumeChart(volumes: Vec<VolumeByPlatform>) -> Element {
    let frame = ChartFrame::default();
    let count = volumes.len();
    let peak = volumes
        .iter()
        .flat_map(|v| [v.tripadvisor, v.google, v.yelp])
        .max()
        .unwrap_or(0);
    let axis_max = volume_axis_max(peak);
    let band = frame.plot_width() / count.max(1) as f64 * 0.22;

    let mut bars = Vec::with_capacity(count * 3);
    let mut labels = Vec::with_capacity(count);

    for (idx, volume) in volumes.iter().enumerate() {
        let center = frame.slot_center(idx, count);
        let grouped: [(f64, &'static str, u64); 3] = [
            (-1.0, "chart-bar chart-bar--google", volume.google),
            (0.0, "chart-bar chart-bar--yelp", volume.yelp),
            (1.0, "chart-bar chart-bar--tripadvisor", volume.tripadvisor),
        ];
        for (offset, css_class, value) in grouped {
            let top = frame.y_at(value as f64, 0.0, axis_max);
            bars.push(BarShape {
                css_class,
                x: center + offset * band - band / 2.0,
                y: top,
                width: band * 0.92,
                height: frame.plot_bottom() - top,
                tooltip: format!("{}: {} reviews", volume.period, value),
            });
        }
        labels.push(AxisLabel {
            x: center,
            y: frame.plot_bottom() + 24.0,
            text: volume.period.clone(),
        });
    }

    rsx! {
        svg {
            class: "chart",
            view_box: "0 0 {frame.width} {frame.height}",
            preserve_aspect_ratio: "xMidYMid meet",

            AxisGrid { frame, max: axis_max, tick_count: 6, decimals: 0 }
            Bars { bars }

            for label in labels {
                text { class: "chart-label", x: "{label.x}", y: "{label.y}", text_anchor: "middle", "{label.text}" }
            }

            PlatformLegend { frame }
        }
    }
}

/// Render a batch of precomputed bars.
#[component]
fn Bars(bars: Vec<BarShape>) -> Element {
    rsx! {
        for bar in bars {
            rect {
                class: "{bar.css_class}",
                x: "{bar.x}",
                y: "{bar.y}",
                width: "{bar.width}",
                height: "{bar.height}",
                title { "{bar.tooltip}" }
            }
        }
    }
}

/// Shared horizontal gridlines + y-axis tick labels.
#[component]
fn AxisGrid(frame: ChartFrame, max: f64, tick_count: usize, decimals: usize) -> Element {
    let marks: Vec<(f64, String)> = ticks(0.0, max, tick_count)
        .into_iter()
        .map(|tick| (frame.y_at(tick, 0.0, max), format_tick(tick, decimals)))
        .collect();
    let x_start = frame.margin_left;
    let x_end = frame.width - frame.margin_right;
    let label_x = frame.margin_left - 8.0;

    rsx! {
        g { class: "chart-grid",
            for (y, label) in marks {
                line {
                    class: "chart-grid__line",
                    x1: "{x_start}",
                    x2: "{x_end}",
                    y1: "{y}",
                    y2: "{y}",
                }
                text {
                    class: "chart-label",
                    x: "{label_x}",
                    y: "{y + 4.0}",
                    text_anchor: "end",
                    "{label}"
                }
            }
        }
    }
}

#[component]
fn PlatformLegend(frame: ChartFrame) -> Element {
    let entries: Vec<(f64, &'static str, &'static str)> = [
        ("chart-legend__swatch chart-legend__swatch--google", "Google Maps"),
        ("chart-legend__swatch chart-legend__swatch--yelp", "Yelp"),
        (
            "chart-legend__swatch chart-legend__swatch--tripadvisor",
            "TripAdvisor",
        ),
    ]
    .iter()
    .enumerate()
    .map(|(idx, (css_class, label))| (frame.margin_left + idx as f64 * 130.0, *css_class, *label))
    .collect();
    let swatch_y = frame.height - 14.0;
    let text_y = frame.height - 4.0;

    rsx! {
        g { class: "chart-legend",
            for (x, css_class, label) in entries {
                rect {
                    class: "{css_class}",
                    x: "{x}",
                    y: "{swatch_y}",
                    width: "12",
                    height: "12",
                }
                text { class: "chart-label", x: "{x + 18.0}", y: "{text_y}", "{label}" }
            }
        }
    }
}

fn format_tick(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Indices of the quarters bracketing the construction window, if both
/// appear in the timeline.
fn construction_window(points: &[TimelinePoint]) -> Option<(usize, usize)> {
    let start = points.iter().position(|p| p.quarter == CONSTRUCTION_START)?;
    let end = points.iter().position(|p| p.quarter == CONSTRUCTION_END)?;
    (start <= end).then_some((start, end))
}
