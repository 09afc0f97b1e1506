use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Fixed-precision decimal text. Negative zero prints as zero.
#[must_use]
pub fn format_fixed(value: f64, decimals: usize) -> String {
    // -0.0 + 0.0 == +0.0
    let value = value + 0.0;
    format!("{value:.decimals$}")
}

/// Currency text with two decimals, e.g. `$123.40`.
#[must_use]
pub fn format_currency(value: f64) -> String {
    format!("${}", format_fixed(value, 2))
}

/// Currency text for an optional price, `n/a` when absent or non-finite.
#[must_use]
pub fn format_optional_currency(value: Option<f64>) -> String {
    match value {
        Some(value) if value.is_finite() => format_currency(value),
        _ => "n/a".to_owned(),
    }
}

/// Renders a sample date as abbreviated month plus two-digit day (`Mar 05`).
///
/// Accepts plain ISO dates and RFC 3339 timestamps. Anything else is
/// returned unchanged.
#[must_use]
pub fn format_short_date(raw: &str) -> String {
    match parse_sample_date(raw) {
        Some(date) => date.format("%b %d").to_string(),
        None => raw.to_owned(),
    }
}

fn parse_sample_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}
