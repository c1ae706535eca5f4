//! rotaview library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! derivation core (status, progress blocks, calendar grouping).

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let now = cli.now.as_deref();

    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg, now),
        Commands::Progress { .. } => cli::commands::progress::handle(&cli.command, cfg, now),
        Commands::Calendar { .. } => cli::commands::calendar::handle(&cli.command, cfg, now),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, now),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // command-line override of the snapshot directory
    if let Some(custom) = &cli.data {
        cfg.data_dir = custom.clone();
    }

    dispatch(&cli, &cfg)
}
