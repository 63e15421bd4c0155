use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Environment variable naming the log file base path.
pub const LOG_ENV_VAR: &str = "RANDOO_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default: stderr belongs to the child.
/// Set `RANDOO_LOG` (or `logging.log_file`) to a path to enable it.
///
/// Log files get unique names so concurrent invocations don't clobber each
/// other: `{path}.{timestamp}.{pid}`
pub fn init_tracing(config: &LoggingConfig) {
    let Some(log_path) = resolve_log_path(config) else {
        return;
    };

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path.display(), timestamp, pid);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.log_filter.as_deref().unwrap_or("info"))
    });

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("randoo: warning: failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

fn resolve_log_path(config: &LoggingConfig) -> Option<PathBuf> {
    std::env::var_os(LOG_ENV_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| config.log_file.clone())
}
