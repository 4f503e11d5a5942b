use dioxus::prelude::*;

struct Step {
    number: &'static str,
    title: &'static str,
    description: &'static str,
}

const STEPS: [Step; 4] = [
    Step {
        number: "01",
        title: "Data Collection",
        description: "620+ reviews aggregated from TripAdvisor spanning 2011-2018, \
                      with Google Maps and Yelp series synthesized until those \
                      datasets are collected",
    },
    Step {
        number: "02",
        title: "Period Classification",
        description: "Reviews categorized into Pre (before Feb 2016), During \
                      (Feb 2016 - May 2018), and Post-Construction periods",
    },
    Step {
        number: "03",
        title: "Statistical Analysis",
        description: "Average ratings, quarterly trends, and percentage changes \
                      computed across platforms and time periods",
    },
    Step {
        number: "04",
        title: "Visualization",
        description: "Interactive charts reveal patterns, validate construction \
                      impact, and measure recovery",
    },
];

/// The four-step research method, rendered as a card grid.
#[component]
pub fn MethodologySteps() -> Element {
    rsx! {
        section { class: "dash-card dash-method",
            div { class: "dash-card__header dash-card__header--centered",
                h2 { {crate::t!("section-methodology-title")} }
                p { class: "dash-card__sub", {crate::t!("section-methodology-sub")} }
            }

            div { class: "dash-method__grid",
                for step in STEPS.iter() {
                    div { class: "dash-method__step",
                        span { class: "dash-method__number", "{step.number}" }
                        h3 { "{step.title}" }
                        p { "{step.description}" }
                    }
                }
            }
        }
    }
}
