//! Time utilities: parsing and validating HH:MM clock strings.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub const TIME_FORMAT: &str = "%H:%M";

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), TIME_FORMAT).ok()
}

/// Normalize a CLI clock string ("8:05" → "08:05").
pub fn normalize_time(t: &str) -> AppResult<String> {
    let parsed = parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))?;
    Ok(parsed.format(TIME_FORMAT).to_string())
}

pub fn normalize_optional_time(input: Option<&String>) -> AppResult<Option<String>> {
    input.map(|s| normalize_time(s)).transpose()
}
