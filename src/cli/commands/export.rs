use crate::cli::parser::Commands;
use crate::cli::session::Session;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::ExportLogic;

/// Handle the `export` command
pub fn handle(cmd: &Commands, cfg: &Config, now_arg: Option<&str>) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        hr_id,
        force,
    } = cmd
    {
        let session = Session::open(cfg, now_arg, range.as_deref(), *hr_id)?;
        let summaries = Core::build_summaries(&session.snapshot.shifts, &session.ctx())?;

        ExportLogic::export(&summaries, *format, file, *force)?;
    }
    Ok(())
}
