//! Formatting helpers for presenting ratings and counts.

/// Two-decimal rating display, e.g. `3.63`.
pub fn format_rating(value: f64) -> String {
    format!("{value:.2}")
}

/// Star-suffixed rating for badges, e.g. `3.90 ★`.
pub fn format_rating_stars(value: f64) -> String {
    format!("{value:.2} ★")
}

/// Signed one-decimal percentage, e.g. `+10.2%` / `-2.5%`.
pub fn format_signed_percent(value: f64) -> String {
    format!("{value:+.1}%")
}

/// Unsigned one-decimal percentage, e.g. `7.4%`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Review counts with a thousands separator once they need one.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        let remaining = digits.len() - idx;
        if idx > 0 && remaining % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Relative change between two averages, in percent.
pub fn pct_change(from: f64, to: f64) -> f64 {
    if from == 0.0 {
        return 0.0;
    }
    (to - from) / from * 100.0
}
