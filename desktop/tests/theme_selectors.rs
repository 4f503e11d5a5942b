#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that critical CSS selectors required by the desktop UI (the
  chart host, the comparison slider, and both theme variable blocks)
  remain present in the unified shared theme: ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes,
  preventing a silent styling regression in packaged (embedded) desktop
  builds.

How it works:
- We compile‑time embed the unified theme using `include_str!` pointing
  to the shared `ui/` location (mirrors the constant in
  `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

Why not parse CSS properly?
- A lightweight substring presence check is sufficient as an early warning.
- Keeping zero extra dependencies avoids increasing compile times.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".app {",
    // Theme variable blocks
    ".theme-light",
    ".theme-dark",
    "--color-bg",
    // Buttons & shared cards
    ".button {",
    ".button--primary",
    ".dash-card",
    ".dash-card__header",
    ".dash-card--placeholder",
    ".dash-card--error",
    // Hero
    ".hero__badge",
    ".hero__chip",
    // Stat counters
    ".dash-counters",
    ".dash-counter__value",
    ".dash-counter__trend--down",
    // Chart host & marks
    ".dash-charts__tabs",
    ".dash-charts__tab--active",
    ".chart-grid__line",
    ".chart-line--tripadvisor",
    ".chart-line--google",
    ".chart-line--yelp",
    ".chart-bar--google",
    ".chart-window",
    ".chart-legend__swatch--yelp",
    // Insights
    ".dash-insights__grid",
    ".dash-insight__value",
    // Before/after comparison
    ".dash-compare__stage",
    ".dash-compare__slider",
    ".dash-compare__divider",
    // Methodology
    ".dash-method__grid",
    // Floating controls
    ".theme-toggle",
    ".share__panel",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn both_theme_blocks_define_the_same_variables() {
    // Every variable the dark block overrides must exist in the light
    // block too, or toggling themes leaks values across modes.
    for var in [
        "--color-bg",
        "--color-surface",
        "--color-border",
        "--color-text",
        "--color-primary",
        "--chart-google",
        "--chart-yelp",
        "--chart-tripadvisor",
    ] {
        let occurrences = THEME_CSS.matches(var).count();
        assert!(
            occurrences >= 2,
            "Variable `{var}` should be defined in both .theme-light and .theme-dark \
             (found {occurrences} occurrence(s))"
        );
    }
}
