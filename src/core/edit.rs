use crate::core::session::EditSession;
use crate::db::log::audit_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::{load_executable_index, load_farm_event, save_update};
use crate::errors::{AppError, AppResult};
use crate::models::RowId;
use crate::models::executable::ExecutableRef;
use crate::models::patch::FarmEventUpdate;
use crate::models::view_model::{FarmEventViewModel, ViewField};
use crate::utils::tz::resolve_timezone;

/// Field edits collected from the command line, in the order given.
#[derive(Debug, Default, Clone)]
pub struct EditRequest {
    pub fields: Vec<(ViewField, String)>,
    pub executable: Option<ExecutableRef>,
    pub dry_run: bool,
}

#[derive(Debug)]
pub enum EditOutcome {
    /// Nothing was edited; the session stayed pristine.
    Unchanged(FarmEventViewModel),
    /// The patch that would be saved.
    DryRun(FarmEventUpdate),
    Saved(FarmEventUpdate),
}

pub struct EditLogic;

impl EditLogic {
    pub fn apply(
        pool: &mut DbPool,
        id: RowId,
        timezone: Option<&str>,
        request: EditRequest,
    ) -> AppResult<EditOutcome> {
        let record = load_farm_event(&pool.conn, id)?;
        let index = load_executable_index(&pool.conn)?;

        let mut session = EditSession::new(&record, timezone, &index);
        for (field, value) in request.fields {
            session.merge_field(field, value);
        }
        if let Some(exe) = request.executable {
            session.set_executable(exe.id().to_string(), exe.kind());
        }

        if !session.is_dirty() {
            return Ok(EditOutcome::Unchanged(session.current_view_model()));
        }

        // End date and time only make sense together
        let vm = session.current_view_model();
        if vm.end_date.is_empty() != vm.end_time.is_empty() {
            return Err(AppError::InvalidDate(
                "end date and end time must be given together".into(),
            ));
        }

        // A farm event must always point at an existing executable
        let executable = session.get_executable()?;

        if request.dry_run {
            let update = session.commit(|_| Ok(()))?;
            return Ok(EditOutcome::DryRun(update));
        }

        let tz = resolve_timezone(timezone);
        let conn = &pool.conn;
        let update = session.commit(|u| save_update(conn, u, tz).map(|_| ()))?;

        audit_or_warn(
            conn,
            "edit",
            &format!("farm_event #{}", id),
            &format!(
                "{} {} ({}), {}",
                executable.executable_type,
                executable.value,
                executable.label,
                update.patch.time_unit.describe(update.patch.repeat)
            ),
        );

        Ok(EditOutcome::Saved(update))
    }
}
