use super::time_of_day::TimeOfDay;
use crate::core::rules::{DerivationRules, OvernightPolicy};
use crate::errors::{AppError, AppResult};
use crate::utils::date::lenient_date;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A scheduled work period, as served by `GET /rota/shifts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    #[serde(default)]
    pub unq_id: Option<i64>, // ⇔ none for synthesized pseudo-shifts
    pub hr_id: i64,
    #[serde(with = "lenient_date")]
    pub shiftdate: NaiveDate,
    pub shiftstart: TimeOfDay,
    pub shiftend: TimeOfDay,
    #[serde(default)]
    pub shiftcat: Option<String>,
    #[serde(default)]
    pub shiftloc: Option<String>,
    #[serde(default)]
    pub agent: String,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub unallocated: bool,
}

impl Shift {
    pub fn date_str(&self) -> String {
        self.shiftdate.format("%Y-%m-%d").to_string()
    }

    pub fn start_at(&self) -> NaiveDateTime {
        self.shiftdate.and_time(self.shiftstart.to_naive_time())
    }

    /// End timestamp of the shift.
    ///
    /// A `shiftend` earlier than `shiftstart` is an overnight shift: under
    /// [`OvernightPolicy::NextDay`] it ends on the following day, under
    /// [`OvernightPolicy::Reject`] it is an error.
    pub fn end_at(&self, rules: &DerivationRules) -> AppResult<NaiveDateTime> {
        let end = self.shiftdate.and_time(self.shiftend.to_naive_time());

        if self.shiftend >= self.shiftstart {
            return Ok(end);
        }

        match rules.overnight {
            OvernightPolicy::NextDay => Ok(end + Duration::days(1)),
            OvernightPolicy::Reject => Err(AppError::InvalidShiftWindow {
                shift: self.label(),
                start: self.shiftstart.to_string(),
                end: self.shiftend.to_string(),
            }),
        }
    }

    /// Start and end timestamps together.
    pub fn window(&self, rules: &DerivationRules) -> AppResult<(NaiveDateTime, NaiveDateTime)> {
        Ok((self.start_at(), self.end_at(rules)?))
    }

    pub fn display_agent(&self) -> &str {
        if self.agent.trim().is_empty() {
            "-"
        } else {
            &self.agent
        }
    }

    /// Short identifier used in messages.
    pub fn label(&self) -> String {
        match self.unq_id {
            Some(id) => format!("#{id}"),
            None => format!("hr {} on {}", self.hr_id, self.date_str()),
        }
    }
}
