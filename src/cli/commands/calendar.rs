use crate::cli::parser::Commands;
use crate::cli::session::Session;
use crate::config::Config;
use crate::core::calculator::status::derive_status;
use crate::core::filter::Filter;
use crate::core::group::GroupOptions;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::colors::colorize;
use crate::utils::formatting::bold;

/// Handle the `calendar` command
pub fn handle(cmd: &Commands, cfg: &Config, now_arg: Option<&str>) -> AppResult<()> {
    if let Commands::Calendar {
        period,
        hr_id,
        merge,
        group_by,
        filters,
        search,
    } = cmd
    {
        let filters = filters
            .iter()
            .map(|f| Filter::parse(f))
            .collect::<AppResult<Vec<Filter>>>()?;

        let session = Session::open(cfg, now_arg, period.as_deref(), *hr_id)?;
        let ctx = session.ctx();

        let opts = GroupOptions {
            merge: *merge,
            filters: &filters,
            search: search.as_deref(),
        };

        let grouped = Core::build_calendar(&session.snapshot.shifts, *group_by, &ctx, &opts)?;

        if grouped.is_empty() {
            warning(format!("No shifts for {}", session.period_label()));
            return Ok(());
        }

        header(
            format!(
                "Calendar for {} ({} shifts)",
                session.period_label(),
                grouped.shift_count()
            ),
            &cfg.separator_char,
        );

        for (date, groups) in &grouped.days {
            println!("{}", bold(&date.format("%Y-%m-%d (%a)").to_string()));

            for group in groups {
                println!("  {} [{}]", group.key, group.shifts.len());

                for shift in &group.shifts {
                    let status = derive_status(
                        shift,
                        ctx.timesheets,
                        ctx.events,
                        ctx.now,
                        ctx.rules,
                    )?;
                    println!(
                        "    {}-{}  {:<20} {}",
                        shift.shiftstart,
                        shift.shiftend,
                        shift.display_agent(),
                        colorize(&status.label, status.tone)
                    );
                }
            }
        }
    }
    Ok(())
}
