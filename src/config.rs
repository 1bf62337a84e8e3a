//! Configuration for the kernel front-end.
//!
//! Values are layered: built-in defaults, then an optional file (TOML, YAML
//! or JSON, picked by extension), then `NUM_KERNELS_*` environment variables
//! with `__` separating nested keys (e.g. `NUM_KERNELS_SIEVE__MAX_BOUND`).
//! The kernels themselves never read configuration.

use crate::{Error, Result};

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "NUM_KERNELS";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Caller-side limits for the prime sieve
    pub sieve: SieveConfig,
    /// Default integration parameters
    pub trapezoid: TrapezoidConfig,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level directive (`trace`, `debug`, `info`, `warn`, `error`, `off`)
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl LoggingConfig {
    /// Parse the configured level.
    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(self.level.trim()).map_err(|e| {
            Error::config_key(
                format!("invalid log level `{}`: {}", self.level, e),
                "logging.level",
            )
        })
    }
}

/// Limits applied before calling the sieve.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SieveConfig {
    /// Largest bound accepted, `0` disables the check
    pub max_bound: usize,
}

impl Default for SieveConfig {
    fn default() -> Self {
        Self {
            max_bound: 100_000_000,
        }
    }
}

impl SieveConfig {
    /// Reject `bound` if it exceeds `max_bound`.
    pub fn check_bound(&self, bound: usize) -> Result<()> {
        if self.max_bound != 0 && bound > self.max_bound {
            return Err(Error::invalid_argument(
                "n",
                format!(
                    "bound {} exceeds the configured maximum of {}",
                    bound, self.max_bound
                ),
            ));
        }
        Ok(())
    }
}

/// Integration parameters used when the caller does not supply them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrapezoidConfig {
    /// Lower bound
    pub a: f64,
    /// Upper bound
    pub b: f64,
    /// Number of subintervals
    pub subintervals: usize,
}

impl Default for TrapezoidConfig {
    fn default() -> Self {
        Self {
            a: 0.0,
            b: 1.0,
            subintervals: 1_000_000,
        }
    }
}

impl Config {
    /// Load defaults overlaid with environment variables.
    pub fn from_env() -> Result<Self> {
        Self::load(None)
    }

    /// Load defaults, then `path`, then environment variables.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::load(Some(path.as_ref()))
    }

    fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder =
            ::config::Config::builder().add_source(::config::Config::try_from(&Config::default())?);

        if let Some(path) = path {
            if !path.exists() {
                return Err(Error::config(format!(
                    "configuration file not found: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(::config::File::from(path));
        }

        let settings = builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = settings.try_deserialize()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        self.logging.level_filter()?;

        if self.trapezoid.subintervals == 0 {
            return Err(Error::config_key(
                "subinterval count must be at least 1",
                "trapezoid.subintervals",
            ));
        }
        if !self.trapezoid.a.is_finite() {
            return Err(Error::config_key("bound must be finite", "trapezoid.a"));
        }
        if !self.trapezoid.b.is_finite() {
            return Err(Error::config_key("bound must be finite", "trapezoid.b"));
        }

        Ok(())
    }
}
