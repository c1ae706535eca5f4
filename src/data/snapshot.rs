//! Rota snapshot loading.
//!
//! A snapshot directory holds one JSON array per rota endpoint. Shifts,
//! timesheets and events are read on every fetch; user states and
//! utilisation targets go through TTL caches.

use crate::core::cache::{Loader, RefreshCache};
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::shift::Shift;
use crate::models::timesheet::Timesheet;
use crate::models::user_state::{UserDirectory, UserState, UtilisationTarget};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use log::{debug, info};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const SHIFTS_FILE: &str = "shifts.json";
pub const TIMESHEETS_FILE: &str = "timesheets.json";
pub const EVENTS_FILE: &str = "events.json";
pub const USER_STATES_FILE: &str = "user-states.json";
pub const TARGETS_FILE: &str = "targets.json";

/// Endpoint filters: `start_date`, `end_date` and optional `hr_id`.
///
/// `slack` widens the timesheet range on both sides so punches matching a
/// shift through the clock-on tolerance are not cut at midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotaQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub hr_id: Option<i64>,
    pub slack: TimeDelta,
}

impl RotaQuery {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            hr_id: None,
            slack: TimeDelta::zero(),
        }
    }

    pub fn day(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    pub fn with_hr_id(mut self, hr_id: Option<i64>) -> Self {
        self.hr_id = hr_id;
        self
    }

    pub fn with_slack(mut self, slack: TimeDelta) -> Self {
        self.slack = slack;
        self
    }

    pub fn covers(&self, date: NaiveDate, hr_id: i64) -> bool {
        date >= self.start_date
            && date <= self.end_date
            && self.hr_id.is_none_or(|id| id == hr_id)
    }

    /// Like [`covers`](Self::covers) for a timestamp, with the range widened
    /// by `slack`.
    pub fn covers_with_slack(&self, ts: NaiveDateTime, hr_id: i64) -> bool {
        let from = self.start_date.and_time(NaiveTime::MIN) - self.slack;
        let until = self.end_date.and_time(NaiveTime::MIN) + TimeDelta::days(1) + self.slack;

        ts >= from && ts < until && self.hr_id.is_none_or(|id| id == hr_id)
    }
}

/// Read a JSON array file, record by record so a bad record is reported
/// with its position. Missing optional files read as empty.
pub fn read_json_array<T: DeserializeOwned>(path: &Path, required: bool) -> AppResult<Vec<T>> {
    if !path.exists() {
        if required {
            return Err(AppError::Snapshot(format!(
                "missing required file {}",
                path.display()
            )));
        }
        debug!("{} not found, using empty list", path.display());
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let raw: Vec<serde_json::Value> = serde_json::from_str(&content)
        .map_err(|e| AppError::Snapshot(format!("{}: {e}", path.display())))?;

    raw.into_iter()
        .enumerate()
        .map(|(i, v)| {
            serde_json::from_value(v).map_err(|e| {
                AppError::Snapshot(format!("{} record {}: {e}", path.display(), i + 1))
            })
        })
        .collect()
}

/// Loader for one snapshot file.
pub struct JsonFile<T> {
    path: PathBuf,
    required: bool,
    _record: PhantomData<T>,
}

impl<T> JsonFile<T> {
    pub fn required(path: PathBuf) -> Self {
        Self {
            path,
            required: true,
            _record: PhantomData,
        }
    }

    pub fn optional(path: PathBuf) -> Self {
        Self {
            path,
            required: false,
            _record: PhantomData,
        }
    }
}

impl<T: DeserializeOwned> Loader<Vec<T>> for JsonFile<T> {
    fn load(&mut self) -> AppResult<Vec<T>> {
        read_json_array(&self.path, self.required)
    }
}

/// Data of one fetch, already filtered by the query.
#[derive(Debug, Clone, Default)]
pub struct RotaSnapshot {
    pub shifts: Vec<Shift>,
    pub timesheets: Vec<Timesheet>,
    pub events: Vec<Event>,
    pub user_states: Vec<UserState>,
    pub targets: Vec<UtilisationTarget>,
}

impl RotaSnapshot {
    pub fn users(&self) -> UserDirectory {
        UserDirectory::new(&self.user_states)
    }
}

pub struct SnapshotSource {
    dir: PathBuf,
    user_states: RefreshCache<Vec<UserState>, JsonFile<UserState>>,
    targets: RefreshCache<Vec<UtilisationTarget>, JsonFile<UtilisationTarget>>,
}

impl SnapshotSource {
    pub fn new(dir: &Path, refresh_interval: Duration) -> Self {
        Self {
            dir: dir.to_path_buf(),
            user_states: RefreshCache::new(
                JsonFile::optional(dir.join(USER_STATES_FILE)),
                refresh_interval,
            ),
            targets: RefreshCache::new(
                JsonFile::optional(dir.join(TARGETS_FILE)),
                refresh_interval,
            ),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load the records matching `query`.
    ///
    /// Events filed against a fetched shift are kept whatever their date.
    /// Punches inside the query slack are kept only for employees with a
    /// fetched shift, so they never surface as unallocated work.
    pub fn fetch(&mut self, query: &RotaQuery) -> AppResult<RotaSnapshot> {
        if !self.dir.is_dir() {
            return Err(AppError::Snapshot(format!(
                "data directory not found: {}",
                self.dir.display()
            )));
        }

        let shifts: Vec<Shift> = read_json_array::<Shift>(&self.dir.join(SHIFTS_FILE), true)?
            .into_iter()
            .filter(|s| query.covers(s.shiftdate, s.hr_id))
            .collect();

        let shift_ids: HashSet<i64> = shifts.iter().filter_map(|s| s.unq_id).collect();
        let scheduled: HashSet<i64> = shifts.iter().map(|s| s.hr_id).collect();

        let timesheets: Vec<Timesheet> =
            read_json_array::<Timesheet>(&self.dir.join(TIMESHEETS_FILE), false)?
                .into_iter()
                .filter(|t| {
                    query.covers(t.work_date(), t.hr_id)
                        || (scheduled.contains(&t.hr_id)
                            && query.covers_with_slack(t.on_time, t.hr_id))
                })
                .collect();

        let events: Vec<Event> = read_json_array::<Event>(&self.dir.join(EVENTS_FILE), false)?
            .into_iter()
            .filter(|e| {
                query.covers(e.work_date(), e.hr_id)
                    || e.shift_id.is_some_and(|id| shift_ids.contains(&id))
            })
            .collect();

        let user_states = self.user_states.get()?.clone();
        let targets = self.targets.get()?.clone();

        info!(
            "snapshot {}..{}: {} shifts, {} timesheets, {} events, {} users",
            query.start_date,
            query.end_date,
            shifts.len(),
            timesheets.len(),
            events.len(),
            user_states.len()
        );

        Ok(RotaSnapshot {
            shifts,
            timesheets,
            events,
            user_states,
            targets,
        })
    }

    /// Force the cached lookups to reload on next fetch.
    pub fn refresh_caches(&mut self) {
        self.user_states.invalidate();
        self.targets.invalidate();
    }
}
