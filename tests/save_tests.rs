use chrono::{TimeZone, Utc};
use chrono_tz::Tz;
use farmevent::core::lookup::ExecutableIndex;
use farmevent::core::session::EditSession;
use farmevent::db::pool::DbPool;
use farmevent::db::queries::{insert_farm_event, load_farm_event, save_update};
use farmevent::errors::AppError;
use farmevent::models::executable::ExecutableRef;
use farmevent::models::farm_event::FarmEvent;
use farmevent::models::time_unit::TimeUnit;
use farmevent::models::view_model::ViewField;
use std::env;
use std::fs;

const NEW_YORK: &str = "America/New_York";

fn open_pool(name: &str) -> DbPool {
    let mut path = env::temp_dir();
    path.push(format!("{}_farmevent_save.sqlite", name));
    fs::remove_file(&path).ok();
    DbPool::new(&path.to_string_lossy()).expect("open test db")
}

/// 2024-11-03 01:30 in New York happens twice: 05:30Z (EDT) and 06:30Z (EST).
fn event_at(start_utc_hour: u32) -> FarmEvent {
    FarmEvent {
        id: None,
        start_time: Utc.with_ymd_and_hms(2024, 11, 3, start_utc_hour, 30, 0).unwrap(),
        end_time: Some(Utc.with_ymd_and_hms(2024, 11, 3, 6, 30, 0).unwrap()),
        repeat: 1,
        time_unit: TimeUnit::Daily,
        executable: ExecutableRef::Sequence(1),
    }
}

fn edit_and_save(pool: &DbPool, id: i64, fields: &[(ViewField, &str)]) -> Result<FarmEvent, AppError> {
    let tz: Tz = NEW_YORK.parse().unwrap();
    let record = load_farm_event(&pool.conn, id)?;
    let index = ExecutableIndex::new();
    let mut session = EditSession::new(&record, Some(NEW_YORK), &index);
    for (field, value) in fields {
        session.merge_field(*field, *value);
    }
    session.commit(|u| save_update(&pool.conn, u, tz).map(|_| ()))?;
    load_farm_event(&pool.conn, id)
}

#[test]
fn test_unrelated_edit_keeps_second_pass_of_repeated_hour() {
    let pool = open_pool("second_pass_kept");
    let id = insert_farm_event(&pool.conn, &event_at(6)).unwrap();

    let saved = edit_and_save(&pool, id, &[(ViewField::Repeat, "3")]).unwrap();

    assert_eq!(saved.repeat, 3);
    assert_eq!(saved.start_time, Utc.with_ymd_and_hms(2024, 11, 3, 6, 30, 0).unwrap());
    assert_eq!(
        saved.end_time,
        Some(Utc.with_ymd_and_hms(2024, 11, 3, 6, 30, 0).unwrap())
    );
}

#[test]
fn test_unrelated_edit_keeps_first_pass_of_repeated_hour() {
    let pool = open_pool("first_pass_kept");
    let id = insert_farm_event(&pool.conn, &event_at(5)).unwrap();

    let saved = edit_and_save(&pool, id, &[(ViewField::TimeUnit, "weekly")]).unwrap();

    assert_eq!(saved.time_unit, TimeUnit::Weekly);
    assert_eq!(saved.start_time, Utc.with_ymd_and_hms(2024, 11, 3, 5, 30, 0).unwrap());
}

#[test]
fn test_new_time_in_repeated_hour_takes_earlier_instant() {
    let pool = open_pool("new_time_earliest");
    let mut ev = event_at(6);
    ev.start_time = Utc.with_ymd_and_hms(2024, 11, 2, 12, 0, 0).unwrap();
    let id = insert_farm_event(&pool.conn, &ev).unwrap();

    let saved = edit_and_save(
        &pool,
        id,
        &[(ViewField::StartDate, "2024-11-03"), (ViewField::StartTime, "01:30")],
    )
    .unwrap();

    assert_eq!(saved.start_time, Utc.with_ymd_and_hms(2024, 11, 3, 5, 30, 0).unwrap());
}

#[test]
fn test_time_skipped_by_dst_is_rejected() {
    let pool = open_pool("dst_gap_rejected");
    let id = insert_farm_event(&pool.conn, &event_at(6)).unwrap();

    let result = edit_and_save(
        &pool,
        id,
        &[(ViewField::StartDate, "2024-03-10"), (ViewField::StartTime, "02:30")],
    );

    assert!(matches!(result, Err(AppError::InvalidTime(_))));
    let unchanged = load_farm_event(&pool.conn, id).unwrap();
    assert_eq!(unchanged.start_time, event_at(6).start_time);
}
