//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Flatpak Remote - Inspect the refs a flatpak remote publishes
#[derive(Parser, Debug)]
#[command(name = "flatpak-remote")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,

    /// flatpak binary to invoke (name on PATH or absolute path)
    #[arg(
        long,
        global = true,
        value_name = "CMD",
        env = "FLATPAK_COMMAND",
        default_value = flatpak_remote::flatpak::DEFAULT_COMMAND
    )]
    flatpak_command: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every ref in a remote from the quick listing
    List(commands::list::ListArgs),

    /// Show the full record for one ref, including history and metadata
    Info(commands::info::InfoArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        env_logger::Builder::new()
            .parse_filters(&self.log_level)
            .init();

        match self.command {
            Commands::List(args) => commands::list::execute(args, &self.flatpak_command),
            Commands::Info(args) => commands::info::execute(args, &self.flatpak_command),
        }
    }
}
