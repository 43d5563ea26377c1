//! Persisted farm event → editable view model.

use crate::models::farm_event::FarmEvent;
use crate::models::view_model::FarmEventViewModel;
use crate::utils::date::DATE_FORMAT;
use crate::utils::time::TIME_FORMAT;
use crate::utils::tz::{resolve_timezone, to_local};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Project a stored farm event into the string fields a form binds to.
///
/// Timestamps are split into date and time strings in `timezone`; a missing
/// or unknown timezone projects in UTC. A missing end time projects to empty
/// strings, so every field of the view model is always populated.
pub fn project(record: &FarmEvent, timezone: Option<&str>) -> FarmEventViewModel {
    let tz = resolve_timezone(timezone);
    let (start_date, start_time) = split(&record.start_time, tz);
    let (end_date, end_time) = record
        .end_time
        .as_ref()
        .map(|ts| split(ts, tz))
        .unwrap_or_default();

    FarmEventViewModel {
        start_date,
        start_time,
        end_date,
        end_time,
        repeat: record.repeat.to_string(),
        time_unit: record.time_unit.as_str().to_string(),
        executable_type: record.executable.kind().as_str().to_string(),
        executable_id: record.executable.id().to_string(),
    }
}

fn split(ts: &DateTime<Utc>, tz: Tz) -> (String, String) {
    let local = to_local(ts, tz);
    (
        local.format(DATE_FORMAT).to_string(),
        local.format(TIME_FORMAT).to_string(),
    )
}
