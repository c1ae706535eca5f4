use crate::core::rules::DerivationRules;

/// Scheduled meal break for a shift of the given length:
/// none up to 4h, 30 minutes up to 7h, 60 minutes beyond.
pub fn scheduled_break_minutes(total_shift_minutes: i64, rules: &DerivationRules) -> i64 {
    if total_shift_minutes <= rules.short_shift_max_minutes {
        0
    } else if total_shift_minutes <= rules.medium_shift_max_minutes {
        rules.medium_shift_break_minutes
    } else {
        rules.long_shift_break_minutes
    }
}

/// Worked time as a floored percentage of the paid (break-free) shift time.
pub fn worked_percent(actual_minutes: i64, total_shift_minutes: i64, break_minutes: i64) -> i64 {
    let paid = total_shift_minutes - break_minutes;
    if paid <= 0 {
        return 0;
    }

    let pct = (100.0 * actual_minutes as f64 / paid as f64).floor() as i64;
    pct.max(0)
}
