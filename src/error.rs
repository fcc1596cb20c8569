//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `flatpak-remote` crate. It uses the `thiserror` library to create a
//! single `Error` enum covering every anticipated failure mode of the
//! adapter, providing clear and descriptive error messages.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum that represents all possible errors that can
//!   occur while invoking the external tool or parsing its output. Each
//!   variant carries contextual information (the rendered command line, the
//!   captured output, the offending value) to aid in debugging.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the crate to simplify function signatures.
//!
//! Every variant is consumed at or below the lookup-service boundary: the
//! public operations log the cause and return an absent or empty result
//! instead of surfacing a typed error to callers.

use thiserror::Error;

/// Main error type for flatpak-remote operations
#[derive(Error, Debug)]
pub enum Error {
    /// The external command exited with a code other than 0 or 1.
    ///
    /// Exit code 1 is a legitimate "not found" answer from flatpak, so only
    /// the remaining non-zero codes are failures. The captured combined
    /// output is kept as diagnostic text.
    #[error("Command failed: {command} - {output}")]
    CommandFailed { command: String, output: String },

    /// The external command exceeded its wall-clock budget and was killed.
    #[error("Command timed out after {timeout_secs}s: {command}")]
    CommandTimeout { command: String, timeout_secs: u64 },

    /// A `Date:` value did not match the fixed `yyyy-MM-dd HH:mm:ss Z`
    /// pattern of the remote-info contract.
    #[error("Date parsing error: {value}")]
    DateFormat {
        value: String,
        source: chrono::ParseError,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error indicating that a mutex or other lock has been poisoned.
    #[error("Lock poisoned: {context}")]
    LockPoisoned { context: String },
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
