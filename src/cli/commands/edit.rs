use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditLogic, EditOutcome, EditRequest};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::time_unit::TimeUnit;
use crate::models::view_model::ViewField;
use crate::ui::messages::{info, success};
use crate::utils::date;
use crate::utils::time::normalize_time;

/// Edit an existing farm event.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        start_date,
        start_time,
        end_date,
        end_time,
        repeat,
        unit,
        executable,
        set,
        dry_run,
    } = cmd
    {
        let mut request = EditRequest {
            executable: executable.selected(),
            dry_run: *dry_run,
            ..Default::default()
        };

        //
        // 1. Typed flags behave like the form's pickers and selects
        //
        for (field, value) in [
            (ViewField::StartDate, start_date),
            (ViewField::EndDate, end_date),
        ] {
            if let Some(d) = value {
                if !date::is_form_date(d) {
                    return Err(AppError::InvalidDate(d.clone()));
                }
                request.fields.push((field, d.clone()));
            }
        }
        for (field, value) in [
            (ViewField::StartTime, start_time),
            (ViewField::EndTime, end_time),
        ] {
            if let Some(t) = value {
                request.fields.push((field, normalize_time(t)?));
            }
        }
        if let Some(u) = unit {
            let u = u.parse::<TimeUnit>().map_err(AppError::Config)?;
            request.fields.push((ViewField::TimeUnit, u.as_str().to_string()));
        }
        // Repeat is a free text input: validated on recombination
        if let Some(r) = repeat {
            request.fields.push((ViewField::Repeat, r.clone()));
        }

        //
        // 2. Raw overrides, applied last
        //
        for raw in set {
            request.fields.push(parse_override(raw)?);
        }

        //
        // 3. Execute logic
        //
        let mut pool = DbPool::new(&cfg.database)?;
        match EditLogic::apply(&mut pool, *id, cfg.device_timezone.as_deref(), request)? {
            EditOutcome::Unchanged(_) => {
                info(format!("Nothing to change for farm event #{}.", id));
            }
            EditOutcome::DryRun(update) => {
                info(format!("Dry run: farm event #{} would be updated with:", id));
                println!("{}", serde_json::to_string_pretty(&update)?);
            }
            EditOutcome::Saved(update) => {
                println!("{}", serde_json::to_string_pretty(&update)?);
                success(format!("Farm event #{} updated.", id));
            }
        }
    }

    Ok(())
}

/// `field=value` → (ViewField, value). The value may be empty.
fn parse_override(raw: &str) -> AppResult<(ViewField, String)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| AppError::Config(format!("expected FIELD=VALUE, got '{}'", raw)))?;
    let field = key.trim().parse::<ViewField>().map_err(AppError::Config)?;
    Ok((field, value.to_string()))
}
