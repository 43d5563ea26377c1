use crate::config::Config;
use crate::core::projector::project;
use crate::core::session::ExecutableLookup;
use crate::db::pool::DbPool;
use crate::db::queries::{load_executable_index, load_farm_events};
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    let events = load_farm_events(&pool.conn)?;

    if events.is_empty() {
        info("No farm events scheduled.");
        return Ok(());
    }

    let index = load_executable_index(&pool.conn)?;
    let tz = cfg.device_timezone.as_deref();

    let mut table = Table::new(vec![
        Column::new("ID", 4),
        Column::new("EXECUTABLE", 24),
        Column::new("START", 16),
        Column::new("END", 16),
        Column::new("REPEAT", 12),
    ]);

    for ev in &events {
        let vm = project(ev, tz);
        let label = index
            .find_executable(ev.executable)
            .map(|d| format!("{} ({})", d.label, ev.executable))
            .unwrap_or_else(|| format!("<missing> ({})", ev.executable));
        let end = if ev.is_one_time() || vm.end_date.is_empty() {
            "-".to_string()
        } else {
            format!("{} {}", vm.end_date, vm.end_time)
        };

        table.add_row(vec![
            ev.id.map(|id| id.to_string()).unwrap_or_default(),
            label,
            format!("{} {}", vm.start_date, vm.start_time),
            end,
            ev.describe_repeat(),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}
