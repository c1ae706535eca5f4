mod common;
use common::{rti, temp_dir, temp_out, write_snapshot};
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

const NOW: &str = "2024-01-01T18:00";

/// Fresh config home plus a populated snapshot directory.
fn setup(name: &str) -> (String, PathBuf) {
    let home = temp_dir(&format!("{name}_home"));
    let data = temp_dir(&format!("{name}_data"));
    write_snapshot(&data);
    (home.to_string_lossy().to_string(), data)
}

#[test]
fn status_lists_derived_statuses() {
    let (home, data) = setup("cli_status");

    rti(&home)
        .args(["--data", data.to_str().unwrap(), "--now", NOW, "--test", "status"])
        .assert()
        .success()
        .stdout(contains("Shift status for 2024-01-01"))
        .stdout(contains("Alice Smith"))
        .stdout(contains("Attended"))
        .stdout(contains("Sick"))
        .stdout(contains("Absent"));
}

#[test]
fn status_for_one_employee() {
    let (home, data) = setup("cli_status_hr");

    rti(&home)
        .args([
            "--data",
            data.to_str().unwrap(),
            "--now",
            NOW,
            "status",
            "--period",
            "2024-01",
            "--hr-id",
            "10",
        ])
        .assert()
        .success()
        .stdout(contains("2024-01-01 → 2024-01-31"))
        .stdout(contains("2024-01-02"))
        .stdout(contains("Bob Jones").not());
}

#[test]
fn status_on_empty_day_warns() {
    let (home, data) = setup("cli_status_empty");

    rti(&home)
        .args([
            "--data",
            data.to_str().unwrap(),
            "--now",
            "2024-02-10T09:00",
            "status",
        ])
        .assert()
        .success()
        .stdout(contains("No shifts for 2024-02-10"));
}

#[test]
fn progress_shows_utilisation_and_blocks() {
    let (home, data) = setup("cli_progress");

    rti(&home)
        .args([
            "--data",
            data.to_str().unwrap(),
            "--now",
            NOW,
            "progress",
            "--hr-id",
            "10",
        ])
        .assert()
        .success()
        .stdout(contains("Shift progress for 2024-01-01"))
        .stdout(contains("116%"))
        .stdout(contains("target 90%"))
        .stdout(contains("width    100%"));
}

#[test]
fn calendar_merges_windows_and_lists_unallocated() {
    let (home, data) = setup("cli_calendar");

    rti(&home)
        .args([
            "--data",
            data.to_str().unwrap(),
            "--now",
            NOW,
            "calendar",
            "--merge",
        ])
        .assert()
        .success()
        .stdout(contains("Calendar for 2024-01-01 (4 shifts)"))
        .stdout(contains("09:00-17:00 [3]"))
        .stdout(contains("10:00-11:00 [").not())
        .stdout(contains("unallocated [1]"))
        .stdout(contains("Dan Extra"));
}

#[test]
fn calendar_filter_and_search() {
    let (home, data) = setup("cli_calendar_filter");
    let data = data.to_str().unwrap().to_string();

    rti(&home)
        .args([
            "--data",
            data.as_str(),
            "--now",
            NOW,
            "calendar",
            "--filter",
            "status=Sick",
        ])
        .assert()
        .success()
        .stdout(contains("(1 shifts)"))
        .stdout(contains("Carol White"))
        .stdout(contains("Bob Jones").not());

    rti(&home)
        .args([
            "--data",
            data.as_str(),
            "--now",
            NOW,
            "calendar",
            "--group-by",
            "location",
            "--search",
            "york",
        ])
        .assert()
        .success()
        .stdout(contains("York [1]"))
        .stdout(contains("Bob Jones"));
}

#[test]
fn calendar_rejects_unknown_filter() {
    let (home, data) = setup("cli_calendar_bad_filter");

    rti(&home)
        .args([
            "--data",
            data.to_str().unwrap(),
            "--now",
            NOW,
            "calendar",
            "--filter",
            "colour=red",
        ])
        .assert()
        .failure()
        .stderr(contains("unknown filter 'colour'"));
}

#[test]
fn export_csv_and_json() {
    let (home, data) = setup("cli_export");
    let data = data.to_str().unwrap().to_string();

    let csv_out = temp_out("cli_export", "csv");
    rti(&home)
        .args([
            "--data", data.as_str(), "--now", NOW, "export", "--format", "csv", "--file", csv_out.as_str(), "-f",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed (3 shifts)"));

    let csv = fs::read_to_string(&csv_out).expect("csv written");
    assert!(csv.starts_with("shift_id,hr_id,agent,date,start,end"));
    assert!(csv.contains("Alice Smith"));
    assert!(csv.contains("Sick"));

    let json_out = temp_out("cli_export", "json");
    rti(&home)
        .args([
            "--data", data.as_str(), "--now", NOW, "export", "--format", "json", "--file", json_out.as_str(),
        ])
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_out).expect("json written")).unwrap();
    let rows = json.as_array().expect("array");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["status"], "Attended");
    assert_eq!(rows[0]["worked_percent"], 116);
}

#[test]
fn export_requires_absolute_path() {
    let (home, data) = setup("cli_export_relative");

    rti(&home)
        .args([
            "--data",
            data.to_str().unwrap(),
            "--now",
            NOW,
            "export",
            "--file",
            "report.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn missing_data_directory_fails() {
    let home = temp_dir("cli_no_data_home");
    let missing = home.join("does-not-exist");

    rti(home.to_str().unwrap())
        .args(["--data", missing.to_str().unwrap(), "--now", NOW, "status"])
        .assert()
        .failure()
        .stderr(contains("data directory not found"));
}

#[test]
fn invalid_now_is_rejected() {
    let (home, data) = setup("cli_bad_now");

    rti(&home)
        .args(["--data", data.to_str().unwrap(), "--now", "yesterday", "status"])
        .assert()
        .failure()
        .stderr(contains("Error:"));
}

#[test]
fn init_in_test_mode_creates_data_dir_only() {
    let home = temp_dir("cli_init_home");
    let data = home.join("snapshots");

    rti(home.to_str().unwrap())
        .args(["--data", data.to_str().unwrap(), "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Initializing rotaview"));

    assert!(data.is_dir());
    assert!(!home.join("rotaview.conf").exists());
}

#[test]
fn init_writes_config_that_check_accepts() {
    let home = temp_dir("cli_init_conf_home");
    let home_str = home.to_str().unwrap();

    rti(home_str).arg("init").assert().success();
    assert!(home.join("rotaview.conf").exists());

    rti(home_str)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration file is complete."));
}

#[test]
fn config_migrate_adds_missing_keys() {
    let home = temp_dir("cli_migrate_home");
    let conf = home.join("rotaview.conf");
    fs::write(&conf, "tolerance_minutes: 15\nseparator_char: \"=\"\n").unwrap();

    rti(home.to_str().unwrap())
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing fields"))
        .stdout(contains("overnight_policy"));

    rti(home.to_str().unwrap())
        .args(["config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Configuration migrated"));

    let content = fs::read_to_string(&conf).unwrap();
    assert!(content.contains("tolerance_minutes: 15"));
    assert!(content.contains("overnight_policy: next_day"));
    assert!(content.contains("# overnight_policy options:"));

    rti(home.to_str().unwrap())
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("absent_after_minutes: 60"));
}
