//! Error types for the randoo wrapper.
//!
//! Provides the invocation-level error taxonomy and its mapping onto
//! process exit codes.

use thiserror::Error;

use crate::config::ConfigError;
use crate::process::ChildStatus;

/// Exit code for usage errors and missing delimiters.
pub const EXIT_USAGE: i32 = 2;
/// Exit code for runtime failures (spawn, stdin, config).
pub const EXIT_RUNTIME: i32 = 1;

/// Errors that end a randoo invocation.
#[derive(Debug, Error)]
pub enum RandooError {
    /// Malformed invocation (no command, bad flags).
    #[error("{0}")]
    Usage(String),

    /// A configured delimiter does not occur where it is required.
    #[error("shuffle delimiter not found: {token:?}")]
    DelimiterNotFound { token: String },

    /// The target program could not be started.
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Waiting on the spawned child failed.
    #[error("failed to wait for child: {0}")]
    Wait(#[source] std::io::Error),

    /// Reading argument lines from stdin failed.
    #[error("failed to read input lines: {0}")]
    ReadInput(#[source] std::io::Error),

    /// Configuration file could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Signal interception could not be installed.
    #[error("failed to install signal relay: {0}")]
    Relay(#[source] std::io::Error),

    /// The child ran and did not succeed. Carries its status so it can be
    /// propagated as our own exit code.
    #[error("child {0}")]
    ChildExit(ChildStatus),
}

impl RandooError {
    /// Map error variant to the process exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            RandooError::Usage(_) => EXIT_USAGE,
            RandooError::DelimiterNotFound { .. } => EXIT_USAGE,
            RandooError::Spawn { .. } => EXIT_RUNTIME,
            RandooError::Wait(_) => EXIT_RUNTIME,
            RandooError::ReadInput(_) => EXIT_RUNTIME,
            RandooError::Config(_) => EXIT_RUNTIME,
            RandooError::Relay(_) => EXIT_RUNTIME,
            RandooError::ChildExit(status) => status.exit_code(),
        }
    }

    /// Whether the error should be printed. A failing child already spoke
    /// for itself on its own stderr.
    pub fn is_reported(&self) -> bool {
        !matches!(self, RandooError::ChildExit(_))
    }
}
