//! String-typed, form-facing shape of a farm event.
//!
//! Every field is a `String` because every input a form binds to is
//! string-typed. Only `core::projector` and `core::recombine` convert
//! between this shape and the typed domain model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarmEventViewModel {
    #[serde(rename = "startDate")]
    pub start_date: String, // YYYY-MM-DD
    #[serde(rename = "startTime")]
    pub start_time: String, // HH:MM
    #[serde(rename = "endDate")]
    pub end_date: String,
    #[serde(rename = "endTime")]
    pub end_time: String,
    pub repeat: String,
    #[serde(rename = "timeUnit")]
    pub time_unit: String,
    pub executable_type: String,
    pub executable_id: String,
}

impl FarmEventViewModel {
    pub fn get(&self, field: ViewField) -> &str {
        match field {
            ViewField::StartDate => &self.start_date,
            ViewField::StartTime => &self.start_time,
            ViewField::EndDate => &self.end_date,
            ViewField::EndTime => &self.end_time,
            ViewField::Repeat => &self.repeat,
            ViewField::TimeUnit => &self.time_unit,
            ViewField::ExecutableType => &self.executable_type,
            ViewField::ExecutableId => &self.executable_id,
        }
    }

    pub fn set(&mut self, field: ViewField, value: impl Into<String>) {
        let slot = match field {
            ViewField::StartDate => &mut self.start_date,
            ViewField::StartTime => &mut self.start_time,
            ViewField::EndDate => &mut self.end_date,
            ViewField::EndTime => &mut self.end_time,
            ViewField::Repeat => &mut self.repeat,
            ViewField::TimeUnit => &mut self.time_unit,
            ViewField::ExecutableType => &mut self.executable_type,
            ViewField::ExecutableId => &mut self.executable_id,
        };
        *slot = value.into();
    }

    /// (field, value) pairs in form order.
    pub fn entries(&self) -> impl Iterator<Item = (ViewField, &str)> {
        ViewField::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}

/// Name of one editable view-model field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ViewField {
    StartDate,
    StartTime,
    EndDate,
    EndTime,
    Repeat,
    TimeUnit,
    ExecutableType,
    ExecutableId,
}

impl ViewField {
    pub const ALL: [ViewField; 8] = [
        ViewField::StartDate,
        ViewField::StartTime,
        ViewField::EndDate,
        ViewField::EndTime,
        ViewField::Repeat,
        ViewField::TimeUnit,
        ViewField::ExecutableType,
        ViewField::ExecutableId,
    ];

    /// Form key, as used in the serialized view model.
    pub fn key(&self) -> &'static str {
        match self {
            ViewField::StartDate => "startDate",
            ViewField::StartTime => "startTime",
            ViewField::EndDate => "endDate",
            ViewField::EndTime => "endTime",
            ViewField::Repeat => "repeat",
            ViewField::TimeUnit => "timeUnit",
            ViewField::ExecutableType => "executable_type",
            ViewField::ExecutableId => "executable_id",
        }
    }
}

impl fmt::Display for ViewField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ViewField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewField::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| {
                let keys: Vec<&str> = ViewField::ALL.iter().map(|f| f.key()).collect();
                format!("unknown field '{}' (expected one of: {})", s, keys.join(", "))
            })
    }
}
