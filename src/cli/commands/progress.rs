use crate::cli::parser::Commands;
use crate::cli::session::Session;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::shift_summary::ShiftSummary;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{RESET, color_for_target, colorize};
use crate::utils::formatting::{bold, render_bar};
use crate::utils::mins2readable;

/// Handle the `progress` command
pub fn handle(cmd: &Commands, cfg: &Config, now_arg: Option<&str>) -> AppResult<()> {
    if let Commands::Progress {
        period,
        hr_id,
        width,
    } = cmd
    {
        let session = Session::open(cfg, now_arg, period.as_deref(), *hr_id)?;

        if session.snapshot.shifts.is_empty() {
            warning(format!("No shifts for {}", session.period_label()));
            return Ok(());
        }

        let summaries = Core::build_summaries(&session.snapshot.shifts, &session.ctx())?;

        header(
            format!("Shift progress for {}", session.period_label()),
            &cfg.separator_char,
        );

        for s in &summaries {
            print_summary(s, *width);
        }
    }
    Ok(())
}

fn print_summary(s: &ShiftSummary, width: usize) {
    let p = &s.progress;

    println!(
        "{} {} {}-{}  {}",
        bold(s.shift.display_agent()),
        s.shift.date_str(),
        s.shift.shiftstart,
        s.shift.shiftend,
        colorize(&s.status.label, s.status.tone)
    );

    let target = match s.target {
        Some(t) => format!(" / target {t}%"),
        None => String::new(),
    };

    println!(
        "  {}  {}{}%{}{}  worked {} of {} (break {})",
        render_bar(p, width.max(10)),
        color_for_target(s.meets_target()),
        p.worked_percent,
        RESET,
        target,
        mins2readable(p.total_actual_minutes, false, false),
        mins2readable(p.total_shift_minutes, false, false),
        mins2readable(p.scheduled_break_minutes, false, true),
    );

    for b in &p.blocks {
        println!(
            "    {:<10} {}-{}  left {:>7} width {:>7}  ({})",
            b.category,
            b.start.format("%H:%M"),
            b.end.format("%H:%M"),
            b.left_css(),
            b.width_css(),
            mins2readable(b.minutes(), false, true)
        );
    }
    println!();
}
