//! Tunable thresholds of the derivation engine.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// What to do with a shift whose end time is earlier than its start time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvernightPolicy {
    #[default]
    NextDay,
    Reject,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DerivationRules {
    /// Slack around shift boundaries when matching punches.
    pub tolerance_minutes: i64,
    /// No punch after this long past the start means Absent instead of Late.
    pub absent_after_minutes: i64,
    /// Worked blocks narrower than this (after rounding) are dropped.
    pub min_block_percent: f64,
    /// Lateness blocks must be wider than this.
    pub min_lateness_percent: f64,
    pub short_shift_max_minutes: i64,
    pub medium_shift_max_minutes: i64,
    pub medium_shift_break_minutes: i64,
    pub long_shift_break_minutes: i64,
    pub overnight: OvernightPolicy,
}

impl Default for DerivationRules {
    fn default() -> Self {
        Self {
            tolerance_minutes: 30,
            absent_after_minutes: 60,
            min_block_percent: 1.0,
            min_lateness_percent: 2.5,
            short_shift_max_minutes: 240,
            medium_shift_max_minutes: 420,
            medium_shift_break_minutes: 30,
            long_shift_break_minutes: 60,
            overnight: OvernightPolicy::NextDay,
        }
    }
}

impl DerivationRules {
    pub fn tolerance(&self) -> Duration {
        Duration::minutes(self.tolerance_minutes)
    }

    pub fn absent_after(&self) -> Duration {
        Duration::minutes(self.absent_after_minutes)
    }
}
