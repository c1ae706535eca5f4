use crate::utils::date::{datetime, opt_datetime};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// An attendance punch, as served by `GET /rota/timesheets`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timesheet {
    pub hr_id: i64,
    #[serde(with = "datetime")]
    pub on_time: NaiveDateTime,
    #[serde(default, with = "opt_datetime")]
    pub off_time: Option<NaiveDateTime>, // ⇔ null while still clocked on
    #[serde(default)]
    pub category: Option<String>,
}

impl Timesheet {
    /// Clock-off time, or `now` for an open punch.
    pub fn off_or(&self, now: NaiveDateTime) -> NaiveDateTime {
        self.off_time.unwrap_or(now)
    }

    pub fn work_date(&self) -> NaiveDate {
        self.on_time.date()
    }

    /// Unclipped worked minutes of the punch.
    pub fn duration_minutes(&self, now: NaiveDateTime) -> i64 {
        (self.off_or(now) - self.on_time).num_minutes()
    }
}
