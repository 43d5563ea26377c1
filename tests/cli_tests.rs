use predicates::str::contains;

mod common;
use common::{add_watering_event, fe, init_db, init_db_with_executables, setup_test_db, show_json};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates_database");

    fe().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_register_and_list_executables() {
    let db_path = setup_test_db("register_executables");
    init_db_with_executables(&db_path);

    fe().args(["--db", &db_path, "executables"])
        .assert()
        .success()
        .stdout(contains("Water plants"))
        .stdout(contains("Tomato grow"));
}

#[test]
fn test_register_executable_rejects_unknown_kind() {
    let db_path = setup_test_db("executable_bad_kind");
    init_db(&db_path);

    fe().args(["--db", &db_path, "executable", "--kind", "macro", "Oops"])
        .assert()
        .failure()
        .stderr(contains("Invalid value for 'kind'"));
}

#[test]
fn test_add_and_list_event() {
    let db_path = setup_test_db("add_and_list");
    init_db_with_executables(&db_path);
    add_watering_event(&db_path);

    fe().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Water plants (Sequence #1)"))
        .stdout(contains("2030-01-01 08:00"))
        .stdout(contains("every 2 days"));
}

#[test]
fn test_add_rejects_unknown_executable() {
    let db_path = setup_test_db("add_unknown_executable");
    init_db_with_executables(&db_path);

    fe().args([
        "--db",
        &db_path,
        "add",
        "--regimen",
        "7",
        "--start-date",
        "2030-01-01",
        "--start-time",
        "08:00",
    ])
    .assert()
    .failure()
    .stderr(contains("No Regimen found"));

    fe().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No farm events scheduled"));
}

#[test]
fn test_show_json_projects_the_record() {
    let db_path = setup_test_db("show_json");
    init_db_with_executables(&db_path);
    add_watering_event(&db_path);

    let out = show_json(&db_path, "1", &[]);
    let vm = &out["view_model"];

    assert_eq!(out["timezone"], "UTC");
    assert_eq!(vm["startDate"], "2030-01-01");
    assert_eq!(vm["startTime"], "08:00");
    assert_eq!(vm["endDate"], "2030-01-10");
    assert_eq!(vm["repeat"], "2");
    assert_eq!(vm["timeUnit"], "daily");
    assert_eq!(vm["executable_type"], "Sequence");
    assert_eq!(vm["executable_id"], "1");
    assert_eq!(out["executable"], "Water plants");
    assert_eq!(out["one_time"], false);
    // 1st, 3rd, 5th, 7th and 9th of January
    assert_eq!(out["upcoming"].as_array().map(|a| a.len()), Some(5));
}

#[test]
fn test_show_in_device_timezone() {
    let db_path = setup_test_db("show_timezone");
    init_db_with_executables(&db_path);
    add_watering_event(&db_path);

    let out = show_json(&db_path, "1", &["--tz", "Europe/Rome"]);
    assert_eq!(out["timezone"], "Europe/Rome");
    assert_eq!(out["view_model"]["startTime"], "09:00");

    // Unknown zones fall back to UTC with a warning
    fe().args(["--db", &db_path, "--tz", "Mars/Olympus", "show", "1"])
        .assert()
        .success()
        .stderr(contains("Unknown timezone"))
        .stdout(contains("08:00"));
}

#[test]
fn test_edit_dry_run_does_not_save() {
    let db_path = setup_test_db("edit_dry_run");
    init_db_with_executables(&db_path);
    add_watering_event(&db_path);

    fe().args([
        "--db",
        &db_path,
        "edit",
        "1",
        "--start-time",
        "09:15",
        "--dry-run",
    ])
    .assert()
    .success()
    .stdout(contains("Dry run"))
    .stdout(contains("2030-01-01T09:15:00.000"));

    let out = show_json(&db_path, "1", &[]);
    assert_eq!(out["view_model"]["startTime"], "08:00");
}

#[test]
fn test_edit_saves_patch() {
    let db_path = setup_test_db("edit_saves_patch");
    init_db_with_executables(&db_path);
    add_watering_event(&db_path);

    fe().args([
        "--db",
        &db_path,
        "edit",
        "1",
        "--start-time",
        "9:15",
        "--unit",
        "weekly",
        "--regimen",
        "1",
    ])
    .assert()
    .success()
    .stdout(contains("\"start_time\": \"2030-01-01T09:15:00.000\""))
    .stdout(contains("\"time_unit\": \"weekly\""))
    .stdout(contains("\"executable_type\": \"Regimen\""))
    .stdout(contains("updated"));

    let out = show_json(&db_path, "1", &[]);
    assert_eq!(out["view_model"]["startTime"], "09:15");
    assert_eq!(out["view_model"]["timeUnit"], "weekly");
    assert_eq!(out["view_model"]["endTime"], "08:00");
    assert_eq!(out["executable"], "Tomato grow");
}

#[test]
fn test_edit_with_raw_override() {
    let db_path = setup_test_db("edit_raw_override");
    init_db_with_executables(&db_path);
    add_watering_event(&db_path);

    fe().args(["--db", &db_path, "edit", "1", "--set", "repeat=3"])
        .assert()
        .success();

    let out = show_json(&db_path, "1", &[]);
    assert_eq!(out["view_model"]["repeat"], "3");
}

#[test]
fn test_edit_rejects_non_numeric_repeat() {
    let db_path = setup_test_db("edit_bad_repeat");
    init_db_with_executables(&db_path);
    add_watering_event(&db_path);

    fe().args(["--db", &db_path, "edit", "1", "--set", "repeat=abc"])
        .assert()
        .failure()
        .stderr(contains("Invalid value for 'repeat'"));

    let out = show_json(&db_path, "1", &[]);
    assert_eq!(out["view_model"]["repeat"], "2");
}

#[test]
fn test_edit_rejects_unknown_sequence() {
    let db_path = setup_test_db("edit_unknown_sequence");
    init_db_with_executables(&db_path);
    add_watering_event(&db_path);

    fe().args(["--db", &db_path, "edit", "1", "--sequence", "99"])
        .assert()
        .failure()
        .stderr(contains("No Sequence found"));
}

#[test]
fn test_edit_rejects_unknown_field() {
    let db_path = setup_test_db("edit_unknown_field");
    init_db_with_executables(&db_path);
    add_watering_event(&db_path);

    fe().args(["--db", &db_path, "edit", "1", "--set", "color=red"])
        .assert()
        .failure();
}

#[test]
fn test_edit_without_changes() {
    let db_path = setup_test_db("edit_no_changes");
    init_db_with_executables(&db_path);
    add_watering_event(&db_path);

    fe().args(["--db", &db_path, "edit", "1"])
        .assert()
        .success()
        .stdout(contains("Nothing to change"));
}

#[test]
fn test_delete_event() {
    let db_path = setup_test_db("delete_event");
    init_db_with_executables(&db_path);
    add_watering_event(&db_path);

    fe().args(["--db", &db_path, "del", "1", "-y"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    fe().args(["--db", &db_path, "show", "1"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn test_seed_genesis_is_idempotent() {
    let db_path = setup_test_db("seed_genesis");
    init_db(&db_path);

    for _ in 0..2 {
        fe().args(["--db", &db_path, "seed", "genesis_1.5"])
            .assert()
            .success()
            .stdout(contains("2 tool slot(s)"));
    }

    let output = fe()
        .args(["--db", &db_path, "tools"])
        .output()
        .expect("run tools");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("farmduino_k15"));
    assert_eq!(stdout.matches("Seed Trough").count(), 4, "{}", stdout);
}

#[test]
fn test_seed_rejects_unknown_profile() {
    let db_path = setup_test_db("seed_unknown");
    init_db(&db_path);

    fe().args(["--db", &db_path, "seed", "express_1.0"])
        .assert()
        .failure()
        .stderr(contains("Unknown seed profile"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_records");
    init_db_with_executables(&db_path);
    add_watering_event(&db_path);

    fe().args(["--db", &db_path, "edit", "1", "--repeat", "4"])
        .assert()
        .success();

    fe().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("add"))
        .stdout(contains("edit"));
}

#[test]
fn test_edit_rejects_end_date_without_end_time() {
    let db_path = setup_test_db("edit_end_date_alone");
    init_db_with_executables(&db_path);

    // One-time event with no end
    fe().args([
        "--db",
        &db_path,
        "add",
        "--regimen",
        "1",
        "--start-date",
        "2030-02-01",
        "--start-time",
        "06:00",
    ])
    .assert()
    .success();

    fe().args(["--db", &db_path, "edit", "1", "--end-date", "2030-03-01"])
        .assert()
        .failure()
        .stderr(contains("end date and end time must be given together"));

    let out = show_json(&db_path, "1", &[]);
    assert_eq!(out["view_model"]["endDate"], "");

    fe().args([
        "--db",
        &db_path,
        "edit",
        "1",
        "--end-date",
        "2030-03-01",
        "--end-time",
        "06:00",
    ])
    .assert()
    .success();

    let out = show_json(&db_path, "1", &[]);
    assert_eq!(out["view_model"]["endDate"], "2030-03-01");
    assert_eq!(out["view_model"]["endTime"], "06:00");
}
