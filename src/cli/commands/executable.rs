use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_executable, load_executable_index};
use crate::errors::{AppError, AppResult};
use crate::models::executable::ExecutableType;
use crate::ui::messages::{info, success};
use crate::utils::colors::{RESET, color_for_executable_type};
use crate::utils::table::{Column, Table};

/// Register an executable, or list them all.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;

    match cmd {
        Commands::Executable { kind, name } => {
            let kind = ExecutableType::from_code(kind)
                .ok_or_else(|| AppError::validation("kind", kind.as_str()))?;
            let name = name.trim();
            if name.is_empty() {
                return Err(AppError::validation("name", name));
            }

            let id = insert_executable(&pool.conn, kind, name)?;
            audit_or_warn(
                &pool.conn,
                "executable",
                &format!("{} #{}", kind, id),
                &format!("Registered {} '{}'", kind, name),
            );
            success(format!("{} #{} '{}' registered.", kind, id, name));
        }
        Commands::Executables => {
            let index = load_executable_index(&pool.conn)?;
            if index.is_empty() {
                info("No sequences or regimens registered yet.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("TYPE", 8),
                Column::new("ID", 4),
                Column::new("NAME", 20),
            ]);
            for d in index.options() {
                table.add_row(vec![
                    d.executable_type.to_string(),
                    d.value.to_string(),
                    d.label,
                ]);
            }
            // Colour after layout so escape codes don't skew the widths
            for line in table.render().lines() {
                let kind = line.split_whitespace().next().unwrap_or("");
                println!("{}{}{}", color_for_executable_type(kind), line, RESET);
            }
        }
        _ => {}
    }

    Ok(())
}
