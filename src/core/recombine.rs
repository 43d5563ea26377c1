//! Edited view model → farm event patch.
//!
//! Dates and times are joined textually: the form widgets are trusted to
//! hand over `YYYY-MM-DD` and `HH:MM`. Only the numeric and enum fields are
//! validated here, and any failure rejects the whole view model.

use crate::errors::{AppError, AppResult};
use crate::models::RowId;
use crate::models::executable::ExecutableType;
use crate::models::patch::FarmEventPatch;
use crate::models::time_unit::TimeUnit;
use crate::models::view_model::FarmEventViewModel;

pub fn recombine(vm: &FarmEventViewModel) -> AppResult<FarmEventPatch> {
    let repeat = parse_unsigned::<u32>("repeat", &vm.repeat)?;
    let executable_id = parse_unsigned::<RowId>("executable_id", &vm.executable_id)?;

    let time_unit = TimeUnit::from_db_str(&vm.time_unit)
        .ok_or_else(|| AppError::validation("timeUnit", vm.time_unit.as_str()))?;
    let executable_type = ExecutableType::from_db_str(&vm.executable_type)
        .ok_or_else(|| AppError::validation("executable_type", vm.executable_type.as_str()))?;

    Ok(FarmEventPatch {
        start_time: offset_less_timestamp(&vm.start_date, &vm.start_time),
        end_time: offset_less_timestamp(&vm.end_date, &vm.end_time),
        repeat,
        time_unit,
        executable: executable_type.with_id(executable_id),
    })
}

/// `2017-08-01` + `08:35` → `2017-08-01T08:35:00.000`.
/// `None` while either half is still empty.
fn offset_less_timestamp(date: &str, time: &str) -> Option<String> {
    if date.is_empty() || time.is_empty() {
        return None;
    }
    Some(format!("{date}T{time}:00.000"))
}

/// Base-10, digits only. Signs, whitespace and overflow are all rejected.
fn parse_unsigned<T: std::str::FromStr>(field: &'static str, raw: &str) -> AppResult<T> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::validation(field, raw));
    }
    raw.parse::<T>().map_err(|_| AppError::validation(field, raw))
}
