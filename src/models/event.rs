use crate::utils::date::{datetime, opt_datetime};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A flagged exception on the rota ("Reduced", "Lateness", "Sick",
/// "SMS Sent", "Note", …), as served by `GET /rota/events`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub hr_id: i64,
    #[serde(default)]
    pub shift_id: Option<i64>,
    pub category: String,
    #[serde(default, with = "opt_datetime")]
    pub on_time: Option<NaiveDateTime>,
    #[serde(default, with = "opt_datetime")]
    pub off_time: Option<NaiveDateTime>,
    #[serde(with = "datetime")]
    pub created_at: NaiveDateTime,
}

impl Event {
    pub fn refers_to(&self, shift_id: Option<i64>) -> bool {
        self.shift_id.is_some() && self.shift_id == shift_id
    }

    /// Date the event is filed under when filtering by period.
    pub fn work_date(&self) -> NaiveDate {
        self.on_time.unwrap_or(self.created_at).date()
    }
}
