/// ANSI color helper utilities for terminal output.
use crate::models::status::StatusTone;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const ORANGE: &str = "\x1b[38;5;208m";
pub const BLUE: &str = "\x1b[34m";

/// Terminal color of a status tone:
/// attended → green, upcoming → grey, late → orange,
/// absent → red, sick → yellow, flagged → blue.
pub fn tone_color(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Attended => GREEN,
        StatusTone::Upcoming => GREY,
        StatusTone::Late => ORANGE,
        StatusTone::Absent => RED,
        StatusTone::Sick => YELLOW,
        StatusTone::Flagged => BLUE,
    }
}

pub fn colorize(value: &str, tone: StatusTone) -> String {
    format!("{}{}{}", tone_color(tone), value, RESET)
}

/// Utilisation color against a target: green when met, red otherwise,
/// plain when there is no target.
pub fn color_for_target(met: Option<bool>) -> &'static str {
    match met {
        Some(true) => GREEN,
        Some(false) => RED,
        None => RESET,
    }
}
