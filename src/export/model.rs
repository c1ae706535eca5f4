// src/export/model.rs

use crate::models::shift_summary::ShiftSummary;
use serde::Serialize;

/// Flat status-report row for CSV / JSON export.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct StatusExport {
    pub shift_id: Option<i64>,
    pub hr_id: i64,
    pub agent: String,
    pub date: String,
    pub start: String,
    pub end: String,
    pub category: String,
    pub location: String,
    pub status: String,
    pub tone: String,
    pub scheduled_minutes: i64,
    pub worked_minutes: i64,
    pub break_minutes: i64,
    pub worked_percent: i64,
    pub target_percent: Option<u32>,
    pub first_on: String,
}

impl From<&ShiftSummary> for StatusExport {
    fn from(s: &ShiftSummary) -> Self {
        Self {
            shift_id: s.shift.unq_id,
            hr_id: s.shift.hr_id,
            agent: s.shift.display_agent().to_string(),
            date: s.shift.date_str(),
            start: s.shift.shiftstart.to_string(),
            end: s.shift.shiftend.to_string(),
            category: s.shift.shiftcat.clone().unwrap_or_else(|| "-".into()),
            location: s.shift.shiftloc.clone().unwrap_or_else(|| "-".into()),
            status: s.status.label.clone(),
            tone: s.status.tone.as_str().to_string(),
            scheduled_minutes: s.progress.total_shift_minutes,
            worked_minutes: s.progress.total_actual_minutes,
            break_minutes: s.progress.scheduled_break_minutes,
            worked_percent: s.progress.worked_percent,
            target_percent: s.target,
            first_on: s
                .progress
                .earliest_on
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
        }
    }
}
