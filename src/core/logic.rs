use crate::core::calculator::{blocks, status};
use crate::core::context::RotaContext;
use crate::core::group::{GroupBy, GroupOptions, GroupedShifts, group_shifts};
use crate::errors::AppResult;
use crate::models::shift::Shift;
use crate::models::shift_summary::ShiftSummary;
use crate::models::user_state::target_for;

pub struct Core;

impl Core {
    pub fn build_shift_summary(shift: &Shift, ctx: &RotaContext<'_>) -> AppResult<ShiftSummary> {
        let status =
            status::derive_status(shift, ctx.timesheets, ctx.events, ctx.now, ctx.rules)?;
        let progress = blocks::build_progress(shift, ctx.timesheets, ctx.now, ctx.rules)?;
        let target = target_for(ctx.targets, shift.shiftcat.as_deref()).map(|t| t.target);

        Ok(ShiftSummary {
            shift: shift.clone(),
            status,
            progress,
            target,
        })
    }

    /// Summaries ordered by date, then start time.
    pub fn build_summaries(shifts: &[Shift], ctx: &RotaContext<'_>) -> AppResult<Vec<ShiftSummary>> {
        let mut sorted = shifts.to_vec();
        sorted.sort_by_key(|s| (s.shiftdate, s.shiftstart));

        sorted
            .iter()
            .map(|s| Self::build_shift_summary(s, ctx))
            .collect()
    }

    pub fn build_calendar(
        shifts: &[Shift],
        group_by: GroupBy,
        ctx: &RotaContext<'_>,
        opts: &GroupOptions<'_>,
    ) -> AppResult<GroupedShifts> {
        group_shifts(shifts, |s| group_by.key(s), ctx, opts)
    }
}
