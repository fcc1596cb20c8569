//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `flatpak-remote` command-line tool.
//!
//! Each command module contains:
//! - An `Args` struct that defines the command-specific arguments and
//!   options, derived using `clap`.
//! - An `execute` function that takes the parsed `Args`, builds a lookup
//!   service against the configured flatpak binary, and performs the
//!   command's logic.

pub mod info;
pub mod list;

use flatpak_remote::flatpak::FlatpakCli;
use flatpak_remote::RemoteInfoService;

/// Build the lookup service for the configured flatpak binary.
fn service(flatpak_command: &str) -> RemoteInfoService {
    RemoteInfoService::with_commands(Box::new(FlatpakCli::with_command(flatpak_command)))
}
