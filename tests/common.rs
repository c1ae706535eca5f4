#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use rotaview::core::context::RotaContext;
use rotaview::core::rules::DerivationRules;
use rotaview::models::event::Event;
use rotaview::models::shift::Shift;
use rotaview::models::time_of_day::TimeOfDay;
use rotaview::models::timesheet::Timesheet;
use rotaview::models::user_state::{UserDirectory, UserState, UtilisationTarget};
use rotaview::utils::date::parse_datetime;
use std::env;
use std::fs;
use std::path::PathBuf;

/// CLI command isolated from the user's configuration.
pub fn rti(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rotaview");
    cmd.env("ROTAVIEW_HOME", home);
    cmd
}

/// Create a unique, empty directory inside the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rotaview_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rotaview_{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn dt(s: &str) -> NaiveDateTime {
    parse_datetime(s).expect("valid datetime")
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

pub fn shift(id: i64, hr_id: i64, date: &str, start: i64, end: i64) -> Shift {
    Shift {
        unq_id: Some(id),
        hr_id,
        shiftdate: day(date),
        shiftstart: TimeOfDay::from_hhmm(start).expect("valid start"),
        shiftend: TimeOfDay::from_hhmm(end).expect("valid end"),
        shiftcat: None,
        shiftloc: None,
        agent: format!("Agent {hr_id}"),
        job_title: None,
        unallocated: false,
    }
}

pub fn punch(hr_id: i64, on: &str, off: Option<&str>) -> Timesheet {
    Timesheet {
        hr_id,
        on_time: dt(on),
        off_time: off.map(dt),
        category: None,
    }
}

pub fn event(hr_id: i64, shift_id: i64, category: &str, created_at: &str) -> Event {
    Event {
        hr_id,
        shift_id: Some(shift_id),
        category: category.to_string(),
        on_time: None,
        off_time: None,
        created_at: dt(created_at),
    }
}

pub fn user(hr_id: i64, name: &str, job_title: Option<&str>) -> UserState {
    UserState {
        hr_id,
        name: name.to_string(),
        job_title: job_title.map(str::to_string),
        photo: None,
        last_active: None,
    }
}

/// Owned data behind a `RotaContext`.
pub struct Fixture {
    pub timesheets: Vec<Timesheet>,
    pub events: Vec<Event>,
    pub users: UserDirectory,
    pub targets: Vec<UtilisationTarget>,
    pub now: NaiveDateTime,
    pub rules: DerivationRules,
}

impl Fixture {
    pub fn new(now: &str) -> Self {
        Self {
            timesheets: Vec::new(),
            events: Vec::new(),
            users: UserDirectory::default(),
            targets: Vec::new(),
            now: dt(now),
            rules: DerivationRules::default(),
        }
    }

    pub fn ctx(&self) -> RotaContext<'_> {
        RotaContext {
            timesheets: &self.timesheets,
            events: &self.events,
            users: &self.users,
            targets: &self.targets,
            now: self.now,
            rules: &self.rules,
        }
    }
}

/// Write a small snapshot (two scheduled employees, one orphan punch) to
/// `dir`.
pub fn write_snapshot(dir: &PathBuf) {
    fs::write(
        dir.join("shifts.json"),
        r#"[
  {"unq_id": 1, "hr_id": 10, "shiftdate": "2024-01-01", "shiftstart": 900, "shiftend": 1700,
   "shiftcat": "Support", "shiftloc": "Leeds", "agent": "Alice Smith", "unallocated": false},
  {"unq_id": 2, "hr_id": 20, "shiftdate": "2024-01-01", "shiftstart": 900, "shiftend": 1700,
   "shiftcat": "Support", "shiftloc": "York", "agent": "Bob Jones"},
  {"unq_id": 3, "hr_id": 30, "shiftdate": "2024-01-01", "shiftstart": 1000, "shiftend": 1100,
   "shiftcat": "Sales", "shiftloc": "Leeds", "agent": "Carol White"},
  {"unq_id": 4, "hr_id": 10, "shiftdate": "2024-01-02", "shiftstart": 900, "shiftend": 1700,
   "shiftcat": "Support", "shiftloc": "Leeds", "agent": "Alice Smith"}
]"#,
    )
    .expect("write shifts");

    fs::write(
        dir.join("timesheets.json"),
        r#"[
  {"hr_id": 10, "on_time": "2024-01-01T08:55:00", "off_time": "2024-01-01T17:05:00"},
  {"hr_id": 99, "on_time": "2024-01-01 12:00:00", "off_time": "2024-01-01 14:00:00"}
]"#,
    )
    .expect("write timesheets");

    fs::write(
        dir.join("events.json"),
        r#"[
  {"hr_id": 30, "shift_id": 3, "category": "Sick", "created_at": "2024-01-01T07:30:00"}
]"#,
    )
    .expect("write events");

    fs::write(
        dir.join("user-states.json"),
        r#"[
  {"hr_id": 10, "name": "Alice Smith", "job_title": "Advisor"},
  {"hr_id": 99, "name": "Dan Extra", "job_title": "Temp"}
]"#,
    )
    .expect("write user states");

    fs::write(
        dir.join("targets.json"),
        r#"[{"shiftcat": "Support", "target": 90}]"#,
    )
    .expect("write targets");
}
