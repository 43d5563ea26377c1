//! Occurrence expansion for saved farm events.
//!
//! Repetition is stepped in device-local wall-clock time so that a daily
//! 08:00 event stays at 08:00 across DST changes.

use crate::models::farm_event::FarmEvent;
use crate::models::time_unit::TimeUnit;
use crate::utils::tz::local_naive_to_utc;
use chrono::{DateTime, Datelike, Duration, Months, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Upper bound on steps taken once the walk has reached `from`.
const MAX_STEPS: u32 = 100_000;

/// Next `limit` occurrences of `event` at or after `from`.
pub fn upcoming(event: &FarmEvent, from: DateTime<Utc>, limit: usize, tz: Tz) -> Vec<DateTime<Utc>> {
    if limit == 0 {
        return Vec::new();
    }

    if event.time_unit.is_never() || event.repeat == 0 {
        return if event.start_time >= from {
            vec![event.start_time]
        } else {
            Vec::new()
        };
    }

    let start_local = event.start_time.with_timezone(&tz).naive_local();
    let from_local = from.with_timezone(&tz).naive_local();
    let first = first_step(start_local, from_local, event.time_unit, event.repeat);
    let mut out = Vec::new();

    for n in first..first.saturating_add(MAX_STEPS) {
        let Some(step) = n.checked_mul(event.repeat) else {
            break;
        };
        let Some(local) = advance(start_local, event.time_unit, step) else {
            break;
        };
        // Wall-clock times swallowed by a DST gap are skipped
        let Ok(at) = local_naive_to_utc(&local, tz) else {
            continue;
        };

        if let Some(end) = event.end_time
            && at > end
        {
            break;
        }
        if at >= from {
            out.push(at);
            if out.len() >= limit {
                break;
            }
        }
    }

    out
}

/// Index of a step shortly before `from`, so past occurrences are skipped
/// arithmetically rather than one at a time.
fn first_step(start: NaiveDateTime, from: NaiveDateTime, unit: TimeUnit, repeat: u32) -> u32 {
    if from <= start {
        return 0;
    }

    let elapsed = from - start;
    let months = i64::from(from.year() - start.year()) * 12 + i64::from(from.month())
        - i64::from(start.month());
    let units = match unit {
        TimeUnit::Never => 0,
        TimeUnit::Minutely => elapsed.num_minutes(),
        TimeUnit::Hourly => elapsed.num_hours(),
        TimeUnit::Daily => elapsed.num_days(),
        TimeUnit::Weekly => elapsed.num_weeks(),
        TimeUnit::Monthly => months,
        TimeUnit::Yearly => months / 12,
    };

    // One step of slack for DST shifts and month-end clamping
    let steps = (units / i64::from(repeat.max(1))).saturating_sub(1).max(0);
    u32::try_from(steps).unwrap_or(u32::MAX)
}

fn advance(start: NaiveDateTime, unit: TimeUnit, amount: u32) -> Option<NaiveDateTime> {
    let amount_i = i64::from(amount);
    match unit {
        TimeUnit::Never => Some(start),
        TimeUnit::Minutely => start.checked_add_signed(Duration::try_minutes(amount_i)?),
        TimeUnit::Hourly => start.checked_add_signed(Duration::try_hours(amount_i)?),
        TimeUnit::Daily => start.checked_add_signed(Duration::try_days(amount_i)?),
        TimeUnit::Weekly => start.checked_add_signed(Duration::try_weeks(amount_i)?),
        TimeUnit::Monthly => start.checked_add_months(Months::new(amount)),
        TimeUnit::Yearly => start.checked_add_months(Months::new(amount.checked_mul(12)?)),
    }
}
