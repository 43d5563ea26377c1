use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, NewFarmEvent};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::time_unit::TimeUnit;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time::{normalize_optional_time, normalize_time};

/// Schedule a new farm event.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        executable,
        start_date,
        start_time,
        end_date,
        end_time,
        repeat,
        unit,
    } = cmd
    {
        //
        // 1. Executable (mandatory)
        //
        let executable = executable.selected().ok_or_else(|| {
            AppError::Other("a farm event needs --sequence <ID> or --regimen <ID>".into())
        })?;

        //
        // 2. Dates and times, checked the way a date/clock picker would
        //
        check_date(start_date)?;
        if let Some(d) = end_date {
            check_date(d)?;
        }
        let start_time = normalize_time(start_time)?;
        let end_time = normalize_optional_time(end_time.as_ref())?;

        //
        // 3. Recurrence (config defaults)
        //
        let time_unit = match unit {
            Some(u) => u.parse::<TimeUnit>().map_err(AppError::Config)?,
            None => cfg.default_unit(),
        };
        let repeat = repeat.unwrap_or(cfg.default_repeat);

        //
        // 4. Execute logic
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let id = AddLogic::apply(
            &mut pool,
            cfg.device_timezone.as_deref(),
            NewFarmEvent {
                executable,
                start_date: start_date.clone(),
                start_time: start_time.clone(),
                end_date: end_date.clone(),
                end_time,
                repeat,
                time_unit,
            },
        )?;

        success(format!(
            "Farm event #{} scheduled: {} starting {} {}, {}.",
            id,
            executable,
            start_date,
            start_time,
            time_unit.describe(repeat)
        ));
    }

    Ok(())
}

fn check_date(d: &str) -> AppResult<()> {
    if date::is_form_date(d) {
        Ok(())
    } else {
        Err(AppError::InvalidDate(d.to_string()))
    }
}
