use crate::core::lookup::ExecutableIndex;
use crate::errors::{AppError, AppResult};
use crate::models::RowId;
use crate::models::executable::{ExecutableDescriptor, ExecutableType};
use crate::models::farm_event::FarmEvent;
use crate::models::patch::FarmEventUpdate;
use crate::models::time_unit::TimeUnit;
use crate::utils::tz::{format_storage, parse_storage, wall_clock_to_utc};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

fn timestamp_column(row: &Row, column: &str) -> Result<Option<DateTime<Utc>>> {
    let raw: Option<String> = row.get(column)?;
    raw.map(|s| parse_storage(&s).ok_or_else(|| conversion_error(AppError::InvalidDate(s.clone()))))
        .transpose()
}

pub fn map_row(row: &Row) -> Result<FarmEvent> {
    let start_time = timestamp_column(row, "start_time")?
        .ok_or_else(|| conversion_error(AppError::InvalidDate("missing start_time".into())))?;
    let end_time = timestamp_column(row, "end_time")?;

    let unit_str: String = row.get("time_unit")?;
    let time_unit = TimeUnit::from_db_str(&unit_str)
        .ok_or_else(|| conversion_error(AppError::validation("time_unit", unit_str.as_str())))?;

    let kind_str: String = row.get("executable_type")?;
    let kind = ExecutableType::from_db_str(&kind_str)
        .ok_or_else(|| conversion_error(AppError::validation("executable_type", kind_str.as_str())))?;

    Ok(FarmEvent {
        id: Some(row.get("id")?),
        start_time,
        end_time,
        repeat: row.get("repeat")?,
        time_unit,
        executable: kind.with_id(row.get("executable_id")?),
    })
}

// ---------------------------------------------------------------------------
// Farm events
// ---------------------------------------------------------------------------

pub fn load_farm_event(conn: &Connection, id: RowId) -> AppResult<FarmEvent> {
    let mut stmt = conn.prepare("SELECT * FROM farm_events WHERE id = ?1")?;
    stmt.query_row([id], map_row)
        .optional()?
        .ok_or(AppError::EventNotFound(id))
}

pub fn load_farm_events(conn: &Connection) -> AppResult<Vec<FarmEvent>> {
    let mut stmt = conn.prepare("SELECT * FROM farm_events ORDER BY start_time ASC, id ASC")?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_farm_event(conn: &Connection, ev: &FarmEvent) -> AppResult<RowId> {
    let now = format_storage(&Utc::now());
    conn.execute(
        "INSERT INTO farm_events (start_time, end_time, repeat, time_unit, executable_type, executable_id, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)",
        params![
            format_storage(&ev.start_time),
            ev.end_time.as_ref().map(format_storage),
            ev.repeat,
            ev.time_unit.as_str(),
            ev.executable.kind().as_str(),
            ev.executable.id(),
            now,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Persist a committed update.
///
/// Patch timestamps are device wall-clock times and are resolved to UTC
/// with `tz`. An update without an id inserts a new event (a start time is
/// then mandatory); otherwise omitted timestamps keep their stored value.
pub fn save_update(conn: &Connection, update: &FarmEventUpdate, tz: Tz) -> AppResult<RowId> {
    let patch = &update.patch;
    let current = update.id.map(|id| load_farm_event(conn, id)).transpose()?;

    // An unchanged wall-clock time inside a DST overlap keeps its stored instant
    let start = patch
        .start_time
        .as_deref()
        .map(|s| wall_clock_to_utc(s, tz, current.as_ref().map(|c| c.start_time)))
        .transpose()?;
    let end = patch
        .end_time
        .as_deref()
        .map(|s| wall_clock_to_utc(s, tz, current.as_ref().and_then(|c| c.end_time)))
        .transpose()?;

    match (update.id, current) {
        (Some(id), Some(current)) => {
            let start_time = start.unwrap_or(current.start_time);
            let end_time = end.or(current.end_time);

            conn.execute(
                "UPDATE farm_events
                 SET start_time = ?1, end_time = ?2, repeat = ?3, time_unit = ?4,
                     executable_type = ?5, executable_id = ?6, updated_at = ?7
                 WHERE id = ?8",
                params![
                    format_storage(&start_time),
                    end_time.as_ref().map(format_storage),
                    patch.repeat,
                    patch.time_unit.as_str(),
                    patch.executable_type().as_str(),
                    patch.executable_id(),
                    format_storage(&Utc::now()),
                    id,
                ],
            )?;
            Ok(id)
        }
        _ => {
            let start_time = start.ok_or_else(|| AppError::validation("startDate", ""))?;
            let ev = FarmEvent {
                id: None,
                start_time,
                end_time: end,
                repeat: patch.repeat,
                time_unit: patch.time_unit,
                executable: patch.executable,
            };
            insert_farm_event(conn, &ev)
        }
    }
}

pub fn delete_farm_event(conn: &Connection, id: RowId) -> AppResult<()> {
    let n = conn.execute("DELETE FROM farm_events WHERE id = ?1", [id])?;
    if n == 0 {
        return Err(AppError::EventNotFound(id));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Executables
// ---------------------------------------------------------------------------

pub fn insert_executable(conn: &Connection, kind: ExecutableType, name: &str) -> AppResult<RowId> {
    // Table name comes from a closed enum, never from user input
    let sql = format!(
        "INSERT INTO {} (name, created_at) VALUES (?1, ?2)",
        kind.table()
    );
    conn.execute(&sql, params![name, format_storage(&Utc::now())])?;
    Ok(conn.last_insert_rowid())
}

fn load_executables_of(conn: &Connection, kind: ExecutableType) -> AppResult<Vec<ExecutableDescriptor>> {
    let sql = format!("SELECT id, name FROM {} ORDER BY id ASC", kind.table());
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], |row| {
        Ok(ExecutableDescriptor {
            value: row.get(0)?,
            label: row.get(1)?,
            executable_type: kind,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Snapshot all sequences and regimens for the lookup collaborator.
pub fn load_executable_index(conn: &Connection) -> AppResult<ExecutableIndex> {
    let mut index = ExecutableIndex::new();
    for kind in [ExecutableType::Sequence, ExecutableType::Regimen] {
        for d in load_executables_of(conn, kind)? {
            index.insert(kind, d.value, d.label);
        }
    }
    Ok(index)
}

// ---------------------------------------------------------------------------
// Log
// ---------------------------------------------------------------------------

pub type LogRow = (i64, String, String, String, String);

pub fn load_log(conn: &Connection) -> AppResult<Vec<LogRow>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, IFNULL(target, ''), message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
