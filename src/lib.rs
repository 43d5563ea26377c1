//! farmevent library root.
//! Exposes the CLI parser, the high-level run() function and the farm-event
//! edit engine (`core::projector`, `core::recombine`, `core::session`).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use ui::messages::warning;
use utils::tz::is_known_timezone;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Executable { .. } | Commands::Executables => {
            cli::commands::executable::handle(&cli.command, cfg)
        }
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::List => cli::commands::list::handle(cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Seed { .. } | Commands::Tools => cli::commands::seed::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load the configuration once
    let mut cfg = Config::load()?;

    // Command-line overrides
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(tz) = &cli.tz {
        cfg.device_timezone = Some(tz.clone());
    }

    if let Some(tz) = cfg.device_timezone.as_deref()
        && !is_known_timezone(tz)
    {
        warning(format!("Unknown timezone '{}', using UTC.", tz));
    }

    dispatch(&cli, &cfg)
}
