use super::RowId;
use super::executable::ExecutableRef;
use super::time_unit::TimeUnit;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A farm event as stored: absolute UTC timestamps, typed recurrence and
/// a typed executable reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FarmEvent {
    pub id: Option<RowId>,      // ⇔ farm_events.id (absent until saved)
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>, // kept for one-time events, unused by the scheduler
    pub repeat: u32,
    pub time_unit: TimeUnit,
    #[serde(flatten)]
    pub executable: ExecutableRef,
}

impl FarmEvent {
    /// A not-yet-saved event starting at `start_time` and running once.
    pub fn draft(executable: ExecutableRef, start_time: DateTime<Utc>) -> Self {
        Self {
            id: None,
            start_time,
            end_time: None,
            repeat: 1,
            time_unit: TimeUnit::Never,
            executable,
        }
    }

    pub fn is_one_time(&self) -> bool {
        self.time_unit.is_never()
    }

    /// Human description of the recurrence, e.g. "every 2 days".
    pub fn describe_repeat(&self) -> String {
        self.time_unit.describe(self.repeat)
    }
}
