//! Attendance status of a single shift.

use crate::core::calculator::window::{ShiftWindow, punches_for};
use crate::core::rules::DerivationRules;
use crate::errors::AppResult;
use crate::models::event::Event;
use crate::models::shift::Shift;
use crate::models::status::{DerivedStatus, StatusKind};
use crate::models::timesheet::Timesheet;
use chrono::NaiveDateTime;
use log::debug;

/// Classify a shift. Rules are checked in priority order, first match wins:
///
/// 1. unallocated pseudo-shift → Surplus
/// 2. latest event filed against the shift → its category
/// 3. not started yet → "Due in …" (today) or Upcoming
/// 4. earliest matching punch → Attended / Late, or Late / Absent without one
pub fn derive_status(
    shift: &Shift,
    timesheets: &[Timesheet],
    events: &[Event],
    now: NaiveDateTime,
    rules: &DerivationRules,
) -> AppResult<DerivedStatus> {
    if shift.unallocated {
        let start = shift.start_at();
        let end = shift.end_at(rules).unwrap_or(start);
        return Ok(DerivedStatus::new(StatusKind::Surplus, start, end));
    }

    let window = ShiftWindow::of(shift, rules)?;
    let kind = classify(shift, &window, timesheets, events, now, rules);

    debug!("shift {} classified as {:?}", shift.label(), kind);

    Ok(DerivedStatus::new(kind, window.start, window.end))
}

fn classify(
    shift: &Shift,
    window: &ShiftWindow,
    timesheets: &[Timesheet],
    events: &[Event],
    now: NaiveDateTime,
    rules: &DerivationRules,
) -> StatusKind {
    if let Some(event) = latest_event(shift, events) {
        return StatusKind::Flagged(event.category.clone());
    }

    if window.start > now {
        return if shift.shiftdate == now.date() {
            StatusKind::DueIn((window.start - now).num_minutes())
        } else {
            StatusKind::Upcoming
        };
    }

    match punches_for(shift, window, timesheets, rules).first() {
        Some(punch) if punch.on_time <= window.start => StatusKind::Attended,
        Some(_) => StatusKind::Late,
        None if now - window.start > rules.absent_after() => StatusKind::Absent,
        None => StatusKind::Late,
    }
}

/// Most recently created event referencing the shift; on equal
/// `created_at` the later record wins.
fn latest_event<'a>(shift: &Shift, events: &'a [Event]) -> Option<&'a Event> {
    events
        .iter()
        .filter(|e| e.refers_to(shift.unq_id))
        .fold(None, |best: Option<&Event>, e| match best {
            Some(b) if b.created_at > e.created_at => Some(b),
            _ => Some(e),
        })
}
