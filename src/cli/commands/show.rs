use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::schedule::upcoming;
use crate::core::session::EditSession;
use crate::db::pool::DbPool;
use crate::db::queries::{load_executable_index, load_farm_event};
use crate::errors::AppResult;
use crate::models::view_model::ViewField;
use crate::ui::messages::{detail, header};
use crate::utils::describe_time_unit;
use crate::utils::colors::RESET;
use crate::utils::formatting::or_placeholder;
use crate::utils::tz::{resolve_timezone, to_local};
use chrono::Utc;
use serde_json::json;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id, json } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let record = load_farm_event(&pool.conn, *id)?;
        let index = load_executable_index(&pool.conn)?;

        let timezone = cfg.device_timezone.as_deref();
        let tz = resolve_timezone(timezone);
        let session = EditSession::new(&record, timezone, &index);
        let vm = session.current_view_model();

        // The caller decides how to show an unresolvable executable
        let executable_label = match session.get_executable() {
            Ok(d) => d.label,
            Err(_) => "<missing>".to_string(),
        };

        let next: Vec<String> = upcoming(&record, Utc::now(), cfg.upcoming_limit, tz)
            .iter()
            .map(|at| to_local(at, tz).format("%Y-%m-%d %H:%M %Z").to_string())
            .collect();

        if *json {
            let out = json!({
                "id": record.id,
                "timezone": tz.name(),
                "view_model": vm,
                "executable": executable_label,
                "one_time": session.is_one_time(),
                "upcoming": next,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
            return Ok(());
        }

        header(format!("Farm event #{}", id));
        detail("timezone", tz.name());
        for (field, value) in vm.entries() {
            // Repeat and end fields mean nothing for a one-time event
            let hidden = session.is_one_time()
                && matches!(
                    field,
                    ViewField::Repeat | ViewField::EndDate | ViewField::EndTime
                );
            if hidden {
                continue;
            }
            if field == ViewField::TimeUnit {
                let (label, color) = describe_time_unit(value);
                detail(field, format!("{}{}{} ({})", color, value, RESET, label));
            } else {
                detail(field, or_placeholder(value));
            }
        }
        detail("executable", executable_label);

        if next.is_empty() {
            detail("upcoming", "none");
        } else {
            detail("upcoming", next.join(", "));
        }
    }

    Ok(())
}
