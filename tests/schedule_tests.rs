use chrono::{TimeZone, Utc};
use chrono_tz::Tz;
use farmevent::core::schedule::upcoming;
use farmevent::models::executable::ExecutableRef;
use farmevent::models::farm_event::FarmEvent;
use farmevent::models::time_unit::TimeUnit;

fn event(unit: TimeUnit, repeat: u32) -> FarmEvent {
    FarmEvent {
        id: Some(1),
        start_time: Utc.with_ymd_and_hms(2030, 1, 1, 8, 0, 0).unwrap(),
        end_time: Some(Utc.with_ymd_and_hms(2030, 1, 10, 8, 0, 0).unwrap()),
        repeat,
        time_unit: unit,
        executable: ExecutableRef::Sequence(1),
    }
}

#[test]
fn test_one_time_event_runs_once_ignoring_end() {
    let ev = event(TimeUnit::Never, 5);
    let from = Utc.with_ymd_and_hms(2029, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(upcoming(&ev, from, 10, Tz::UTC), vec![ev.start_time]);

    let after = Utc.with_ymd_and_hms(2030, 1, 2, 0, 0, 0).unwrap();
    assert!(upcoming(&ev, after, 10, Tz::UTC).is_empty());
}

#[test]
fn test_repeating_event_stops_at_end_time_inclusive() {
    let ev = event(TimeUnit::Daily, 3);
    let from = Utc.with_ymd_and_hms(2029, 1, 1, 0, 0, 0).unwrap();
    let days: Vec<u32> = upcoming(&ev, from, 10, Tz::UTC)
        .iter()
        .map(|d| chrono::Datelike::day(d))
        .collect();
    assert_eq!(days, vec![1, 4, 7, 10]);
}

#[test]
fn test_skips_past_occurrences_and_respects_limit() {
    let ev = event(TimeUnit::Daily, 1);
    let from = Utc.with_ymd_and_hms(2030, 1, 5, 9, 0, 0).unwrap();
    let next = upcoming(&ev, from, 2, Tz::UTC);
    assert_eq!(
        next,
        vec![
            Utc.with_ymd_and_hms(2030, 1, 6, 8, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2030, 1, 7, 8, 0, 0).unwrap(),
        ]
    );
    assert!(upcoming(&ev, from, 0, Tz::UTC).is_empty());
}

#[test]
fn test_monthly_steps_clamp_to_month_end() {
    let mut ev = event(TimeUnit::Monthly, 1);
    ev.start_time = Utc.with_ymd_and_hms(2030, 1, 31, 8, 0, 0).unwrap();
    ev.end_time = None;
    let from = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();

    let next = upcoming(&ev, from, 3, Tz::UTC);
    assert_eq!(
        next,
        vec![
            Utc.with_ymd_and_hms(2030, 1, 31, 8, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2030, 2, 28, 8, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2030, 3, 31, 8, 0, 0).unwrap(),
        ]
    );
}

#[test]
fn test_daily_event_keeps_wall_clock_across_dst() {
    // 08:00 in Rome is 07:00Z in winter and 06:00Z in summer (DST starts 2030-03-31)
    let ev = FarmEvent {
        id: Some(1),
        start_time: Utc.with_ymd_and_hms(2030, 3, 30, 7, 0, 0).unwrap(),
        end_time: None,
        repeat: 1,
        time_unit: TimeUnit::Daily,
        executable: ExecutableRef::Regimen(2),
    };
    let tz: Tz = "Europe/Rome".parse().unwrap();
    let from = Utc.with_ymd_and_hms(2030, 3, 1, 0, 0, 0).unwrap();

    let next = upcoming(&ev, from, 2, tz);
    assert_eq!(
        next,
        vec![
            Utc.with_ymd_and_hms(2030, 3, 30, 7, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2030, 3, 31, 6, 0, 0).unwrap(),
        ]
    );
}

#[test]
fn test_zero_repeat_yields_only_start() {
    let ev = event(TimeUnit::Hourly, 0);
    let from = Utc.with_ymd_and_hms(2029, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(upcoming(&ev, from, 5, Tz::UTC), vec![ev.start_time]);
}

#[test]
fn test_long_running_minutely_event_still_has_upcoming_runs() {
    let mut ev = event(TimeUnit::Minutely, 1);
    ev.end_time = None;
    let from = Utc.with_ymd_and_hms(2030, 4, 1, 0, 0, 0).unwrap();

    assert_eq!(
        upcoming(&ev, from, 3, Tz::UTC),
        vec![
            Utc.with_ymd_and_hms(2030, 4, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2030, 4, 1, 0, 1, 0).unwrap(),
            Utc.with_ymd_and_hms(2030, 4, 1, 0, 2, 0).unwrap(),
        ]
    );
}

#[test]
fn test_old_events_resume_on_their_own_grid() {
    let from = Utc.with_ymd_and_hms(2045, 6, 15, 12, 0, 0).unwrap();

    let mut every_five_hours = event(TimeUnit::Hourly, 5);
    every_five_hours.end_time = None;
    let next = upcoming(&every_five_hours, from, 2, Tz::UTC);
    assert_eq!(next.len(), 2);
    assert!(next[0] >= from);
    assert!(next[0] - from < chrono::Duration::hours(5));
    assert_eq!((next[0] - every_five_hours.start_time).num_hours() % 5, 0);
    assert_eq!(next[1] - next[0], chrono::Duration::hours(5));

    let mut monthly = event(TimeUnit::Monthly, 1);
    monthly.start_time = Utc.with_ymd_and_hms(2030, 1, 31, 8, 0, 0).unwrap();
    monthly.end_time = None;
    assert_eq!(
        upcoming(&monthly, from, 2, Tz::UTC),
        vec![
            Utc.with_ymd_and_hms(2045, 6, 30, 8, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2045, 7, 31, 8, 0, 0).unwrap(),
        ]
    );
}

#[test]
fn test_long_running_daily_event_keeps_local_wall_clock() {
    // 08:00 in Rome, started in winter, checked in summer years later
    let ev = FarmEvent {
        id: Some(1),
        start_time: Utc.with_ymd_and_hms(2030, 1, 1, 7, 0, 0).unwrap(),
        end_time: None,
        repeat: 1,
        time_unit: TimeUnit::Daily,
        executable: ExecutableRef::Sequence(1),
    };
    let tz: Tz = "Europe/Rome".parse().unwrap();
    let from = Utc.with_ymd_and_hms(2040, 7, 1, 0, 0, 0).unwrap();

    assert_eq!(
        upcoming(&ev, from, 1, tz),
        vec![Utc.with_ymd_and_hms(2040, 7, 1, 6, 0, 0).unwrap()]
    );
}
