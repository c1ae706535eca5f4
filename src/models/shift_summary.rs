use crate::core::calculator::blocks::ProgressSummary;
use crate::models::shift::Shift;
use crate::models::status::DerivedStatus;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ShiftSummary {
    pub shift: Shift,
    pub status: DerivedStatus,
    pub progress: ProgressSummary,
    pub target: Option<u32>,
}

impl ShiftSummary {
    /// `None` when the shift category has no utilisation target.
    pub fn meets_target(&self) -> Option<bool> {
        self.target
            .map(|t| self.progress.worked_percent >= t as i64)
    }
}
