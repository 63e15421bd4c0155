use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::process::DEFAULT_QUEUE_CAPACITY;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub relay: RelayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Signal relay tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Signals buffered between interception and forwarding (default: 512).
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

/// Diagnostic logging. Off unless a log file is configured.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Base path for the log file; `RANDOO_LOG` takes precedence.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    /// `EnvFilter` directive used when `RUST_LOG` is unset (e.g. "debug").
    #[serde(default)]
    pub log_filter: Option<String>,
}

fn default_queue_capacity() -> usize {
    DEFAULT_QUEUE_CAPACITY
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            queue_capacity: default_queue_capacity(),
        }
    }
}
