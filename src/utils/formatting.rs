//! Formatting utilities used for CLI outputs.

use super::colors;

/// Show empty view-model values as a grey placeholder.
pub fn or_placeholder(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{}--{}", colors::GREY, colors::RESET)
    } else {
        value.to_string()
    }
}

/// Textual description and ANSI color for a time unit code.
pub fn describe_time_unit(code: &str) -> (String, &'static str) {
    match code.to_lowercase().as_str() {
        "never" => ("One time".into(), colors::GREY),
        "minutely" => ("Every minute(s)".into(), colors::MAGENTA),
        "hourly" => ("Every hour(s)".into(), colors::CYAN),
        "daily" => ("Every day(s)".into(), colors::GREEN),
        "weekly" => ("Every week(s)".into(), colors::BLUE),
        "monthly" => ("Every month(s)".into(), colors::YELLOW),
        "yearly" => ("Every year(s)".into(), colors::RED),
        other => (other.to_string(), colors::RESET),
    }
}
