use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the snapshot directory
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.data.clone(), cli.test)?;

    info("Initializing rotaview…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗂️  Data dir    : {}", cfg.data_path().display());

    success(format!(
        "Place shifts.json, timesheets.json, events.json and user-states.json in {}",
        cfg.data_path().display()
    ));
    Ok(())
}
