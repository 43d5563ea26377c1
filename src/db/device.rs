//! Device configuration storage: firmware setting, tools and tool slots.

use crate::errors::{AppError, AppResult};
use crate::models::RowId;
use crate::models::device::{FirmwareHardware, PulloutDirection, Tool, ToolSlot};
use rusqlite::{Connection, OptionalExtension, params};

const FIRMWARE_KEY: &str = "firmware_hardware";

pub fn set_firmware(conn: &Connection, firmware: FirmwareHardware) -> AppResult<()> {
    conn.execute(
        "INSERT INTO device_config (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![FIRMWARE_KEY, firmware.as_str()],
    )?;
    Ok(())
}

pub fn get_firmware(conn: &Connection) -> AppResult<Option<FirmwareHardware>> {
    let raw: Option<String> = conn
        .query_row(
            "SELECT value FROM device_config WHERE key = ?1",
            [FIRMWARE_KEY],
            |row| row.get(0),
        )
        .optional()?;

    raw.map(|s| {
        FirmwareHardware::from_db_str(&s).ok_or_else(|| AppError::validation("firmware_hardware", s))
    })
    .transpose()
}

/// Return the tool called `name`, creating it on first use.
pub fn find_or_add_tool(conn: &Connection, name: &str) -> AppResult<Tool> {
    conn.execute("INSERT OR IGNORE INTO tools (name) VALUES (?1)", [name])?;
    let id: RowId = conn.query_row("SELECT id FROM tools WHERE name = ?1", [name], |row| {
        row.get(0)
    })?;
    Ok(Tool {
        id,
        name: name.to_string(),
    })
}

/// Insert or replace the slot with the same name.
pub fn upsert_tool_slot(conn: &Connection, slot: &ToolSlot) -> AppResult<()> {
    conn.execute(
        "INSERT INTO tool_slots (name, x, y, z, tool_id, pullout_direction, gantry_mounted)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
         ON CONFLICT(name) DO UPDATE SET
             x = excluded.x, y = excluded.y, z = excluded.z,
             tool_id = excluded.tool_id,
             pullout_direction = excluded.pullout_direction,
             gantry_mounted = excluded.gantry_mounted",
        params![
            slot.name,
            slot.x,
            slot.y,
            slot.z,
            slot.tool_id,
            slot.pullout_direction.code(),
            slot.gantry_mounted,
        ],
    )?;
    Ok(())
}

/// Tool slots joined with their tool name, ordered by insertion.
pub fn load_tool_slots(conn: &Connection) -> AppResult<Vec<(ToolSlot, Option<String>)>> {
    let mut stmt = conn.prepare(
        "SELECT s.name, s.x, s.y, s.z, s.tool_id, s.pullout_direction, s.gantry_mounted, t.name
         FROM tool_slots s LEFT JOIN tools t ON t.id = s.tool_id
         ORDER BY s.id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        let code: i64 = row.get(5)?;
        let slot = ToolSlot {
            name: row.get(0)?,
            x: row.get(1)?,
            y: row.get(2)?,
            z: row.get(3)?,
            tool_id: row.get(4)?,
            pullout_direction: PulloutDirection::from_code(code).unwrap_or(PulloutDirection::None),
            gantry_mounted: row.get(6)?,
        };
        Ok((slot, row.get::<_, Option<String>>(7)?))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
