use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit of a farm event's "every N units" recurrence.
///
/// `Never` is the do-not-repeat sentinel: the event runs once at its start
/// time and its end time is ignored by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Never,
    Minutely,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 7] = [
        TimeUnit::Never,
        TimeUnit::Minutely,
        TimeUnit::Hourly,
        TimeUnit::Daily,
        TimeUnit::Weekly,
        TimeUnit::Monthly,
        TimeUnit::Yearly,
    ];

    /// Convert enum → DB / form string
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Never => "never",
            TimeUnit::Minutely => "minutely",
            TimeUnit::Hourly => "hourly",
            TimeUnit::Daily => "daily",
            TimeUnit::Weekly => "weekly",
            TimeUnit::Monthly => "monthly",
            TimeUnit::Yearly => "yearly",
        }
    }

    /// Convert DB / form string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        TimeUnit::ALL.into_iter().find(|u| u.as_str() == s)
    }

    /// Helper: convert input from CLI (any case)
    pub fn from_code(code: &str) -> Option<Self> {
        TimeUnit::from_db_str(&code.trim().to_lowercase())
    }

    pub fn is_never(&self) -> bool {
        matches!(self, TimeUnit::Never)
    }

    /// Human label used in listings ("every 2 days", "once").
    pub fn describe(&self, repeat: u32) -> String {
        let noun = match self {
            TimeUnit::Never => return "once".to_string(),
            TimeUnit::Minutely => "minute",
            TimeUnit::Hourly => "hour",
            TimeUnit::Daily => "day",
            TimeUnit::Weekly => "week",
            TimeUnit::Monthly => "month",
            TimeUnit::Yearly => "year",
        };

        if repeat == 1 {
            format!("every {noun}")
        } else {
            format!("every {repeat} {noun}s")
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeUnit::from_code(s).ok_or_else(|| {
            format!(
                "invalid time unit '{}' (expected one of: never, minutely, hourly, daily, weekly, monthly, yearly)",
                s
            )
        })
    }
}
