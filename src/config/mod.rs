//! Optional TOML configuration for ambient behaviour (relay queue, logging).

mod loader;
mod types;

pub use loader::{ConfigError, CONFIG_ENV_VAR};
pub use types::{Config, LoggingConfig, RelayConfig};
