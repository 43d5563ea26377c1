use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::seed::{SeedLogic, SeedProfile};
use crate::db::device::{get_firmware, load_tool_slots};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{detail, info, success};
use crate::utils::table::{Column, Table};

/// Seed a device profile, or list the seeded tool slots.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;

    match cmd {
        Commands::Seed { profile } => {
            let profile = profile.parse::<SeedProfile>()?;
            let report = SeedLogic::apply(&mut pool, profile)?;

            if let Some(fw) = report.firmware {
                detail("firmware", fw.as_str());
            }
            for slot in &report.slots {
                detail("tool slot", slot);
            }
            success(format!("Device seeded ({} tool slot(s)).", report.slots.len()));
        }
        Commands::Tools => {
            let firmware = get_firmware(&pool.conn)?;
            detail(
                "firmware",
                firmware.map(|f| f.as_str()).unwrap_or("not configured"),
            );

            let slots = load_tool_slots(&pool.conn)?;
            if slots.is_empty() {
                info("No tool slots seeded.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("SLOT", 14),
                Column::new("TOOL", 14),
                Column::new("X", 6),
                Column::new("Y", 6),
                Column::new("Z", 6),
                Column::new("PULLOUT", 7),
                Column::new("GANTRY", 6),
            ]);
            for (slot, tool) in slots {
                table.add_row(vec![
                    slot.name,
                    tool.unwrap_or_else(|| "-".to_string()),
                    format!("{}", slot.x),
                    format!("{}", slot.y),
                    format!("{}", slot.z),
                    slot.pullout_direction.label().to_string(),
                    if slot.gantry_mounted { "yes" } else { "no" }.to_string(),
                ]);
            }
            print!("{}", table.render());
        }
        _ => {}
    }

    Ok(())
}
