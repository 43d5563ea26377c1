//! Device timezone handling.
//!
//! Farm events are stored in UTC and shown/edited in the device's local
//! time. A missing or unrecognised timezone name always falls back to UTC.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Format of the wall-clock timestamps carried by a farm event patch.
pub const WALL_CLOCK_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Format used to persist UTC timestamps.
pub const STORAGE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

pub fn resolve_timezone(name: Option<&str>) -> Tz {
    name.map(str::trim)
        .filter(|n| !n.is_empty())
        .and_then(|n| n.parse::<Tz>().ok())
        .unwrap_or(Tz::UTC)
}

/// True when `name` is a timezone we can actually use (not the UTC fallback).
pub fn is_known_timezone(name: &str) -> bool {
    name.trim().parse::<Tz>().is_ok()
}

pub fn to_local(ts: &DateTime<Utc>, tz: Tz) -> DateTime<Tz> {
    ts.with_timezone(&tz)
}

/// Interpret a naive local datetime in `tz`. On a DST overlap the earlier
/// instant wins; a time that falls into a DST gap is rejected.
pub fn local_naive_to_utc(naive: &NaiveDateTime, tz: Tz) -> AppResult<DateTime<Utc>> {
    local_naive_to_utc_preferring(naive, tz, None)
}

/// Like [`local_naive_to_utc`], but on a DST overlap an instant equal to
/// `known` is kept instead of the earlier one.
pub fn local_naive_to_utc_preferring(
    naive: &NaiveDateTime,
    tz: Tz,
    known: Option<DateTime<Utc>>,
) -> AppResult<DateTime<Utc>> {
    match tz.from_local_datetime(naive) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(first, second) => {
            let second = second.with_timezone(&Utc);
            if known == Some(second) {
                Ok(second)
            } else {
                Ok(first.with_timezone(&Utc))
            }
        }
        LocalResult::None => Err(AppError::InvalidTime(format!(
            "{} does not exist in timezone {}",
            naive.format("%Y-%m-%d %H:%M"),
            tz.name()
        ))),
    }
}

/// Resolve a patch wall-clock timestamp (`YYYY-MM-DDTHH:MM:SS.sss`) to UTC.
/// `known` is the instant already stored for this field, if any.
pub fn wall_clock_to_utc(s: &str, tz: Tz, known: Option<DateTime<Utc>>) -> AppResult<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(s, WALL_CLOCK_FORMAT)
        .map_err(|_| AppError::InvalidDate(s.to_string()))?;
    local_naive_to_utc_preferring(&naive, tz, known)
}

pub fn format_storage(ts: &DateTime<Utc>) -> String {
    ts.format(STORAGE_FORMAT).to_string()
}

pub fn parse_storage(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
