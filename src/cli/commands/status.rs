use crate::cli::parser::Commands;
use crate::cli::session::Session;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::colors::colorize;
use crate::utils::table::{Column, Table};

/// Handle the `status` command
pub fn handle(cmd: &Commands, cfg: &Config, now_arg: Option<&str>) -> AppResult<()> {
    if let Commands::Status { period, hr_id } = cmd {
        let session = Session::open(cfg, now_arg, period.as_deref(), *hr_id)?;

        if session.snapshot.shifts.is_empty() {
            warning(format!("No shifts for {}", session.period_label()));
            return Ok(());
        }

        let summaries = Core::build_summaries(&session.snapshot.shifts, &session.ctx())?;

        header(
            format!("Shift status for {}", session.period_label()),
            &cfg.separator_char,
        );

        let mut table = Table::new(vec![
            Column::new("DATE", 10),
            Column::new("TIME", 11),
            Column::new("AGENT", 20),
            Column::new("CATEGORY", 12),
            Column::new("LOCATION", 12),
            Column::new("STATUS", 16),
        ]);

        for s in &summaries {
            table.add_row(vec![
                s.shift.date_str(),
                format!("{}-{}", s.shift.shiftstart, s.shift.shiftend),
                s.shift.display_agent().to_string(),
                s.shift.shiftcat.clone().unwrap_or_else(|| "-".into()),
                s.shift.shiftloc.clone().unwrap_or_else(|| "-".into()),
                colorize(&s.status.label, s.status.tone),
            ]);
        }

        print!("{}", table.render(&cfg.separator_char));
    }
    Ok(())
}
