//! Shared formatting utilities for the NetWrangler views.

use netwrangler_common::Reading;

/// Shown in place of a value the server did not send.
pub const PLACEHOLDER: &str = "--";

/// Format a numeric value for display with appropriate scale suffix.
///
/// - Values >= 1M display as "X.XM"
/// - Values >= 1K display as "X.XK"
/// - Integer values display without decimal places
/// - Other values display with 2 decimal places
pub fn format_value(value: f64) -> String {
    if value.abs() >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value.abs() >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Format a health score as a percentage, or the placeholder when absent.
///
/// The value is printed as received: `97.5` becomes `"97.5%"`, `98.0`
/// becomes `"98%"`. Zero is a real score, not a missing one.
pub fn health_display(score: Option<f64>) -> String {
    match score {
        Some(value) => format!("{}%", value),
        None => PLACEHOLDER.to_string(),
    }
}

/// Format a reading verbatim, or the placeholder when absent.
pub fn reading_display(reading: Option<&Reading>) -> String {
    reading.map_or_else(|| PLACEHOLDER.to_string(), Reading::to_string)
}

/// Humanize a metric key: `"connected_ues"` becomes `"Connected ues"`.
pub fn metric_label(name: &str) -> String {
    let spaced = name.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
