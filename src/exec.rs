//! Timeout-guarded execution of external commands.
//!
//! Every flatpak invocation goes through [`run_command`], which spawns
//! exactly one OS process, captures its combined stdout/stderr, and
//! enforces a hard wall-clock deadline. A process still running at the
//! deadline is killed and reported as [`Error::CommandTimeout`], distinct
//! from an ordinary non-zero exit.
//!
//! Exit codes 0 and 1 both count as completion: flatpak answers legitimate
//! "ref not found" queries with exit code 1 and useful output on stdout.

use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use log::debug;

use crate::error::{Error, Result};

/// Wall-clock budget applied to every external command invocation.
pub const COMMAND_TIMEOUT: Duration = Duration::from_secs(20);

/// How often a running child is checked against the deadline.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Run `command` to completion and return its combined output verbatim,
/// trailing newlines included.
///
/// Exit codes 0 and 1 are non-fatal completion. Any other exit code
/// produces [`Error::CommandFailed`] carrying the captured output as
/// diagnostic text. If the process outlives `timeout` it is forcibly
/// terminated and [`Error::CommandTimeout`] is returned instead.
pub fn run_command(command: &mut Command, timeout: Duration) -> Result<String> {
    let rendered = render(command);
    debug!("Running external command: {}", rendered);

    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let stdout_reader = spawn_reader(child.stdout.take());
    let stderr_reader = spawn_reader(child.stderr.take());

    let status = match wait_with_deadline(&mut child, timeout)? {
        Some(status) => status,
        None => {
            child.kill()?;
            // Reap the killed child so it does not linger as a zombie.
            child.wait()?;
            return Err(Error::CommandTimeout {
                command: rendered,
                timeout_secs: timeout.as_secs(),
            });
        }
    };

    let mut output = stdout_reader.join().unwrap_or_default();
    output.push_str(&stderr_reader.join().unwrap_or_default());

    match status.code() {
        Some(0) | Some(1) => Ok(output),
        _ => Err(Error::CommandFailed {
            command: rendered,
            output,
        }),
    }
}

/// Poll the child until it exits or the deadline passes. Returns `None`
/// when the deadline won.
fn wait_with_deadline(child: &mut Child, timeout: Duration) -> Result<Option<ExitStatus>> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

/// Drain one output pipe on its own thread so a chatty child cannot
/// deadlock against a full pipe buffer while we poll for its exit.
fn spawn_reader<R: Read + Send + 'static>(source: Option<R>) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut captured = String::new();
        if let Some(mut source) = source {
            let mut bytes = Vec::new();
            if source.read_to_end(&mut bytes).is_ok() {
                captured = String::from_utf8_lossy(&bytes).into_owned();
            }
        }
        captured
    })
}

/// Render the command line for log and error messages.
fn render(command: &Command) -> String {
    let mut rendered = command.get_program().to_string_lossy().into_owned();
    for arg in command.get_args() {
        rendered.push(' ');
        rendered.push_str(&arg.to_string_lossy());
    }
    rendered
}
