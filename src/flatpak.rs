//! Construction and invocation of flatpak commands.
//!
//! This module is the single doorway to the external `flatpak` binary. It
//! knows the three wire commands the adapter consumes (bulk listing,
//! verbose per-ref report, metadata dump) and nothing about their output
//! formats; parsing lives in [`crate::parse`].
//!
//! The [`RemoteCommands`] trait is the seam for tests: the lookup service
//! holds a boxed implementation, which is [`FlatpakCli`] in production and
//! a scripted mock in unit tests.

use std::process::Command;
use std::time::Duration;

use crate::error::Result;
use crate::exec::{self, COMMAND_TIMEOUT};

/// Binary invoked when no override is configured.
pub const DEFAULT_COMMAND: &str = "flatpak";

/// Fixed column set of the bulk listing. The `:f` suffix selects the full
/// (untruncated) value for each column.
const LISTING_COLUMNS: &str = "--columns=ref:f,commit:f,installed-size:f,download-size:f,options:f";

/// The flatpak invocations the lookup service depends on.
///
/// Implementations return the tool's combined output verbatim; exit code 1
/// (flatpak's "not found") is a successful call with whatever text the tool
/// printed.
pub trait RemoteCommands: Send + Sync {
    /// Bulk tabular listing of every ref in `remote`, all architectures.
    fn remote_ls(&self, remote: &str) -> Result<String>;

    /// Verbose per-ref report including the commit history block.
    fn remote_info_log(&self, remote: &str, arch: &str, id: &str) -> Result<String>;

    /// Raw metadata blob for one ref.
    fn remote_metadata(&self, remote: &str, arch: &str, id: &str) -> Result<String>;
}

/// Default implementation backed by the system flatpak binary.
///
/// Always queries the system installation (`--system`), matching the
/// deployment this adapter fronts.
pub struct FlatpakCli {
    command: String,
    timeout: Duration,
}

impl FlatpakCli {
    /// Use a specific binary (a name on `PATH` or an absolute path).
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            timeout: COMMAND_TIMEOUT,
        }
    }

    /// Override the per-invocation wall-clock budget.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn base(&self) -> Command {
        let mut command = Command::new(&self.command);
        command.arg("--system");
        command
    }
}

impl Default for FlatpakCli {
    fn default() -> Self {
        Self::with_command(DEFAULT_COMMAND)
    }
}

impl RemoteCommands for FlatpakCli {
    fn remote_ls(&self, remote: &str) -> Result<String> {
        let mut command = self.base();
        command
            .args(["remote-ls", LISTING_COLUMNS, "--arch=*"])
            .arg(remote);
        exec::run_command(&mut command, self.timeout)
    }

    fn remote_info_log(&self, remote: &str, arch: &str, id: &str) -> Result<String> {
        let mut command = self.base();
        command
            .args(["remote-info", "--log", "--arch"])
            .arg(arch)
            .arg(remote)
            .arg(id);
        exec::run_command(&mut command, self.timeout)
    }

    fn remote_metadata(&self, remote: &str, arch: &str, id: &str) -> Result<String> {
        let mut command = self.base();
        command
            .args(["remote-info", "--show-metadata", "--arch"])
            .arg(arch)
            .arg(remote)
            .arg(id);
        exec::run_command(&mut command, self.timeout)
    }
}
