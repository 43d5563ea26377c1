use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the executable tables (`sequences`, `regimens`).
fn create_executable_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS sequences (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            name       TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS regimens (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            name       TEXT NOT NULL,
            created_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the `farm_events` table.
fn create_farm_events_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS farm_events (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            start_time      TEXT NOT NULL,
            end_time        TEXT,
            repeat          INTEGER NOT NULL DEFAULT 1 CHECK(repeat >= 0),
            time_unit       TEXT NOT NULL DEFAULT 'never'
                            CHECK(time_unit IN ('never','minutely','hourly','daily','weekly','monthly','yearly')),
            executable_type TEXT NOT NULL CHECK(executable_type IN ('Sequence','Regimen')),
            executable_id   INTEGER NOT NULL,
            created_at      TEXT NOT NULL,
            updated_at      TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_farm_events_start ON farm_events(start_time);
        "#,
    )?;
    Ok(())
}

/// Create the device configuration tables filled by the seeders.
fn create_device_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS device_config (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS tools (
            id   INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE
        );

        CREATE TABLE IF NOT EXISTS tool_slots (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            name              TEXT NOT NULL UNIQUE,
            x                 REAL NOT NULL,
            y                 REAL NOT NULL,
            z                 REAL NOT NULL,
            tool_id           INTEGER REFERENCES tools(id),
            pullout_direction INTEGER NOT NULL DEFAULT 0,
            gantry_mounted    INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )?;
    Ok(())
}

/// Index farm events by executable, so deleting or renaming an executable
/// can find its events.
fn migrate_add_executable_index(conn: &Connection) -> Result<()> {
    let version = "20250301_0002_farm_events_executable_index";

    // 1) Already applied?
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    // 2) Apply
    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_farm_events_executable
         ON farm_events(executable_type, executable_id);",
    )?;

    // 3) Mark as applied
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Indexed farm_events by executable')",
        [version],
    )?;

    success(format!("Migration applied: {}", version));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !table_exists(conn, "sequences")? || !table_exists(conn, "regimens")? {
        create_executable_tables(conn)?;
        success("Created executable tables (sequences, regimens).");
    }

    if !table_exists(conn, "farm_events")? {
        create_farm_events_table(conn)?;
        success("Created farm_events table.");
    }

    if !table_exists(conn, "tool_slots")? {
        create_device_tables(conn)?;
        success("Created device tables (device_config, tools, tool_slots).");
    }

    migrate_add_executable_index(conn)?;

    Ok(())
}
