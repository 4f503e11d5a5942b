use dioxus::prelude::*;
use rand::Rng;

/// Platforms shown as chips under the hero copy. Only the first one is
/// backed by real rows today; the other two are the synthesized series.
const PLATFORMS: [&str; 3] = ["TripAdvisor", "Google Maps", "Yelp"];

/// Decorative pulsing "data point" scattered over the hero backdrop.
#[derive(Debug, Clone, PartialEq)]
struct DataPoint {
    x_pct: f64,
    y_pct: f64,
    delay_ms: u32,
    size_px: f64,
}

fn scatter(count: usize) -> Vec<DataPoint> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| DataPoint {
            x_pct: rng.gen_range(2.0..98.0),
            y_pct: rng.gen_range(5.0..90.0),
            delay_ms: rng.gen_range(0..4000),
            size_px: rng.gen_range(3.0..7.0),
        })
        .collect()
}

#[component]
pub fn Hero() -> Element {
    // Seed the scatter once per mount so re-renders don't reshuffle it.
    let points = use_hook(|| scatter(24));

    rsx! {
        header { class: "hero",
            div { class: "hero__backdrop", aria_hidden: "true",
                for point in points.iter() {
                    span {
                        class: "hero__point",
                        style: "left:{point.x_pct}%;top:{point.y_pct}%;width:{point.size_px}px;height:{point.size_px}px;animation-delay:{point.delay_ms}ms;",
                    }
                }
            }

            div { class: "hero__content",
                span { class: "hero__badge", {crate::t!("hero-badge")} }
                h1 { class: "hero__title", {crate::t!("hero-title")} }
                p { class: "hero__subtitle", {crate::t!("hero-subtitle")} }

                div { class: "hero__chips",
                    for platform in PLATFORMS {
                        span { class: "hero__chip", "{platform}" }
                    }
                }
            }
        }
    }
}
