use super::RowId;
use super::executable::{ExecutableRef, ExecutableType};
use super::time_unit::TimeUnit;
use serde::Serialize;

/// Partial farm event produced by recombining an edited view model.
///
/// `start_time` / `end_time` are device-local wall-clock timestamps
/// (`YYYY-MM-DDTHH:MM:00.000`); the saver converts them to UTC with the
/// device timezone. They are omitted while their date or time half is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FarmEventPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    pub repeat: u32,
    pub time_unit: TimeUnit,
    #[serde(flatten)]
    pub executable: ExecutableRef,
}

impl FarmEventPatch {
    pub fn executable_id(&self) -> RowId {
        self.executable.id()
    }

    pub fn executable_type(&self) -> ExecutableType {
        self.executable.kind()
    }
}

/// Output of `EditSession::commit`: the patch addressed to a record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FarmEventUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RowId>,
    #[serde(flatten)]
    pub patch: FarmEventPatch,
}
