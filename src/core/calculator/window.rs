//! Shift time window and the tolerance rule used to decide which punches
//! belong to a shift.

use crate::core::rules::DerivationRules;
use crate::errors::AppResult;
use crate::models::shift::Shift;
use crate::models::timesheet::Timesheet;
use chrono::{Duration, NaiveDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ShiftWindow {
    pub fn of(shift: &Shift, rules: &DerivationRules) -> AppResult<Self> {
        let (start, end) = shift.window(rules)?;
        Ok(Self { start, end })
    }

    pub fn total_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// A punch belongs to the window when it clocks on within
    /// `[start - tol, end]` or clocks off within `[start, end + tol]`.
    pub fn admits(&self, ts: &Timesheet, tolerance: Duration) -> bool {
        let on_ok = ts.on_time >= self.start - tolerance && ts.on_time <= self.end;
        let off_ok = ts
            .off_time
            .is_some_and(|off| off >= self.start && off <= self.end + tolerance);

        on_ok || off_ok
    }
}

/// Punches of the shift's employee that fall inside its tolerance window,
/// ordered by clock-on time.
pub fn punches_for<'a>(
    shift: &Shift,
    window: &ShiftWindow,
    timesheets: &'a [Timesheet],
    rules: &DerivationRules,
) -> Vec<&'a Timesheet> {
    let tolerance = rules.tolerance();

    let mut punches: Vec<&Timesheet> = timesheets
        .iter()
        .filter(|ts| ts.hr_id == shift.hr_id)
        .filter(|ts| window.admits(ts, tolerance))
        .collect();

    punches.sort_by_key(|ts| ts.on_time);
    punches
}
