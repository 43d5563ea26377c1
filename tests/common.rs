#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary, isolated from the user's real config directory.
pub fn fe() -> Command {
    let mut home = env::temp_dir();
    home.push("farmevent_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("farmevent");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_farmevent.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

pub fn init_db(db_path: &str) {
    fe().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Init DB, register "Water plants" (Sequence #1) and "Tomato grow" (Regimen #1).
pub fn init_db_with_executables(db_path: &str) {
    init_db(db_path);

    fe().args(["--db", db_path, "executable", "--kind", "sequence", "Water plants"])
        .assert()
        .success();

    fe().args(["--db", db_path, "executable", "--kind", "regimen", "Tomato grow"])
        .assert()
        .success();
}

/// Adds a daily watering event (#1) every 2 days from 2030-01-01 08:00 to 2030-01-10 08:00 UTC.
pub fn add_watering_event(db_path: &str) {
    fe().args([
        "--db",
        db_path,
        "add",
        "--sequence",
        "1",
        "--start-date",
        "2030-01-01",
        "--start-time",
        "08:00",
        "--end-date",
        "2030-01-10",
        "--end-time",
        "08:00",
        "--repeat",
        "2",
        "--unit",
        "daily",
    ])
    .assert()
    .success();
}

/// `show <id> --json`, parsed.
pub fn show_json(db_path: &str, id: &str, extra: &[&str]) -> serde_json::Value {
    let output = fe()
        .args(["--db", db_path])
        .args(extra)
        .args(["show", id, "--json"])
        .output()
        .expect("run show");
    assert!(output.status.success(), "show failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("show --json prints JSON")
}
