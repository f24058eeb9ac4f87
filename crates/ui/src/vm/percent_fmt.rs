/// Width the indicator is filled to. Out-of-range values are pinned to 0–100.
#[must_use]
pub fn fill_width(percentage: f64) -> f64 {
    if percentage.is_nan() {
        return 0.0;
    }
    percentage.clamp(0.0, 100.0)
}

/// Inline style for the indicator's fill element.
#[must_use]
pub fn fill_style(percentage: f64) -> String {
    format!("width: {}%", trim_number(fill_width(percentage)))
}

/// Unclamped label, e.g. `15%` or `12.5%`.
#[must_use]
pub fn format_percentage(percentage: f64) -> String {
    format!("{}%", trim_number(percentage))
}

fn trim_number(value: f64) -> String {
    let text = format!("{value:.1}");
    text.strip_suffix(".0").map_or(text.clone(), str::to_owned)
}
