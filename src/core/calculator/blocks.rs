//! Progress-bar time blocks of a shift: one block per worked punch, clipped
//! to the shift, plus a leading lateness block when the first punch is late.

use crate::core::calculator::breaks::{scheduled_break_minutes, worked_percent};
use crate::core::calculator::window::{ShiftWindow, punches_for};
use crate::core::rules::DerivationRules;
use crate::errors::AppResult;
use crate::models::shift::Shift;
use crate::models::status::StatusTone;
use crate::models::timesheet::Timesheet;
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Worked,
    Lateness,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeBlock {
    pub kind: BlockKind,
    pub category: String,
    pub tone: StatusTone,
    /// Percentage of the shift covered by the block.
    pub width: f64,
    /// Offset from the shift start, as a percentage of the shift.
    pub left: f64,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub started: NaiveDateTime,
    pub ended: Option<NaiveDateTime>,
}

impl TimeBlock {
    pub fn width_css(&self) -> String {
        format!("{}%", round2(self.width))
    }

    pub fn left_css(&self) -> String {
        format!("{}%", round2(self.left))
    }

    pub fn minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProgressSummary {
    pub blocks: Vec<TimeBlock>,
    pub total_shift_minutes: i64,
    pub total_actual_minutes: i64,
    pub scheduled_break_minutes: i64,
    pub worked_percent: i64,
    pub earliest_on: Option<NaiveDateTime>,
}

pub fn build_progress(
    shift: &Shift,
    timesheets: &[Timesheet],
    now: NaiveDateTime,
    rules: &DerivationRules,
) -> AppResult<ProgressSummary> {
    let window = ShiftWindow::of(shift, rules)?;
    let total = window.total_minutes();
    let break_minutes = scheduled_break_minutes(total, rules);

    let punches = punches_for(shift, &window, timesheets, rules);

    // -----------------------------
    // Worked blocks
    // -----------------------------
    let mut blocks = Vec::new();
    let mut total_actual = 0;

    for ts in &punches {
        total_actual += ts.duration_minutes(now);

        if total <= 0 {
            continue;
        }

        let start = window.start.max(ts.on_time);
        let end = window.end.min(ts.off_or(now));
        let width = percent_of(end - start, total);

        if width.round() < rules.min_block_percent {
            continue;
        }

        blocks.push(TimeBlock {
            kind: BlockKind::Worked,
            category: ts.category.clone().unwrap_or_else(|| "Worked".to_string()),
            tone: StatusTone::Attended,
            width,
            left: percent_of(start - window.start, total),
            start,
            end,
            started: ts.on_time,
            ended: ts.off_time,
        });
    }

    blocks.sort_by(|a, b| a.left.total_cmp(&b.left));

    // -----------------------------
    // Leading lateness
    // -----------------------------
    let earliest_on = punches.first().map(|ts| ts.on_time);

    if let Some(first_on) = earliest_on
        && first_on > window.start
        && total > 0
    {
        let end = first_on.min(window.end);
        let width = percent_of(end - window.start, total);

        if width > rules.min_lateness_percent {
            blocks.insert(
                0,
                TimeBlock {
                    kind: BlockKind::Lateness,
                    category: "Lateness".to_string(),
                    tone: StatusTone::Late,
                    width,
                    left: 0.0,
                    start: window.start,
                    end,
                    started: window.start,
                    ended: Some(end),
                },
            );
        }
    }

    Ok(ProgressSummary {
        blocks,
        total_shift_minutes: total,
        total_actual_minutes: total_actual,
        scheduled_break_minutes: break_minutes,
        worked_percent: worked_percent(total_actual, total, break_minutes),
        earliest_on,
    })
}

fn percent_of(span: chrono::Duration, total_minutes: i64) -> f64 {
    span.num_seconds() as f64 / 60.0 / total_minutes as f64 * 100.0
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
