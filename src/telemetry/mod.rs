//! Logging setup.
//!
//! Installs a global `tracing` subscriber. `RUST_LOG` takes precedence over
//! the configured level when it is set.

use crate::config::LoggingConfig;
use crate::{Error, Result};

use tracing_subscriber::EnvFilter;

/// Build the filter for `config`, preferring `RUST_LOG` when present.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let level = config.level_filter()?;
    Ok(EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy())
}

/// Initialize the global logging subscriber.
///
/// # Errors
///
/// Returns [`Error::Config`] for an unparsable level and [`Error::Internal`]
/// if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed
        .map_err(|e| Error::internal(format!("Failed to set logging subscriber: {}", e)))
}
