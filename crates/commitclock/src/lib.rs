//! CLI module.

use anyhow::Result;
use args::{Args, CommandExecutor};
use clap::Parser;
use commitclock_config::Config;
use commitclock_logging::configure_logging;
use tracing::info;

pub(crate) mod args;
mod commands;
mod config_validator;
#[cfg(test)]
mod testutils;

/// Get version data.
pub fn get_version_data() -> String {
    format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Initialize command line.
pub fn initialize_command_line() -> Result<()> {
    dotenv::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env(env!("CARGO_PKG_VERSION").to_string());
    configure_logging(&config)?;
    config_validator::validate_configuration(&config, args.requires_gist())?;

    info!("{}", get_version_data());

    CommandExecutor::parse_args(config, args)
}
