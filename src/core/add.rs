use crate::core::session::EditSession;
use crate::db::log::audit_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::{load_executable_index, save_update};
use crate::errors::{AppError, AppResult};
use crate::models::RowId;
use crate::models::executable::ExecutableRef;
use crate::models::farm_event::FarmEvent;
use crate::models::time_unit::TimeUnit;
use crate::models::view_model::ViewField;
use crate::utils::tz::resolve_timezone;
use chrono::Utc;

/// A new farm event as entered on the command line (form strings).
#[derive(Debug, Clone)]
pub struct NewFarmEvent {
    pub executable: ExecutableRef,
    pub start_date: String,
    pub start_time: String,
    pub end_date: Option<String>,
    pub end_time: Option<String>,
    pub repeat: u32,
    pub time_unit: TimeUnit,
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Fill a draft event through an edit session and insert it.
    pub fn apply(pool: &mut DbPool, timezone: Option<&str>, input: NewFarmEvent) -> AppResult<RowId> {
        let index = load_executable_index(&pool.conn)?;
        let draft = FarmEvent::draft(input.executable, Utc::now());

        let mut session = EditSession::new(&draft, timezone, &index);
        session.merge_field(ViewField::StartDate, input.start_date);
        session.merge_field(ViewField::StartTime, input.start_time);
        session.merge_field(ViewField::Repeat, input.repeat.to_string());
        session.merge_field(ViewField::TimeUnit, input.time_unit.as_str());

        // End date/time are only kept together; one half alone is meaningless
        match (input.end_date, input.end_time) {
            (Some(d), Some(t)) => {
                session.merge_field(ViewField::EndDate, d);
                session.merge_field(ViewField::EndTime, t);
            }
            (None, None) => {}
            _ => {
                return Err(AppError::InvalidDate(
                    "end date and end time must be given together".into(),
                ));
            }
        }

        let executable = session.get_executable()?;

        let tz = resolve_timezone(timezone);
        let conn = &pool.conn;
        let mut new_id = None;
        session.commit(|u| {
            new_id = Some(save_update(conn, u, tz)?);
            Ok(())
        })?;
        let id = new_id.ok_or_else(|| AppError::Other("insert returned no id".into()))?;

        audit_or_warn(
            conn,
            "add",
            &format!("farm_event #{}", id),
            &format!(
                "{} {} ({}), {}",
                executable.executable_type,
                executable.value,
                executable.label,
                input.time_unit.describe(input.repeat)
            ),
        );

        Ok(id)
    }
}
