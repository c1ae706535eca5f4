//! Formatting utilities used for CLI and export outputs.

use crate::core::calculator::blocks::{BlockKind, ProgressSummary};
use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Left-align `s` in `width` terminal columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        ""
    };

    if short {
        // +02:25 / -01:10
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // +02h 25m / -01h 10m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Text rendering of a progress bar: `#` worked, `!` lateness, `.` idle.
pub fn render_bar(progress: &ProgressSummary, width: usize) -> String {
    let mut cells = vec!['.'; width];

    for block in &progress.blocks {
        let from = ((block.left / 100.0) * width as f64).round().max(0.0) as usize;
        let to = (((block.left + block.width) / 100.0) * width as f64)
            .round()
            .max(0.0) as usize;
        let mark = match block.kind {
            BlockKind::Worked => '#',
            BlockKind::Lateness => '!',
        };

        for cell in cells.iter_mut().take(to.min(width)).skip(from) {
            *cell = mark;
        }
    }

    format!("[{}]", cells.into_iter().collect::<String>())
}
