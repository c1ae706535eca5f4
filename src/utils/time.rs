//! Evaluation-time resolution.

use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::NaiveDateTime;

/// Evaluation time for derivations: `--now` when given, else the local clock.
pub fn resolve_now(arg: Option<&str>) -> AppResult<NaiveDateTime> {
    match arg {
        Some(s) => date::parse_datetime(s).ok_or_else(|| AppError::InvalidTime(s.to_string())),
        None => Ok(date::now()),
    }
}
