//! CLI configuration (env-driven).

use anyhow::{bail, Result};

use crate::output::OutputFormat;

/// Environment variable selecting the default output format.
pub const FORMAT_ENV: &str = "ETWCTL_FORMAT";

/// Environment variable selecting the log filter when `RUST_LOG` is unset.
pub const LOG_LEVEL_ENV: &str = "ETWCTL_LOG_LEVEL";

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Output format used when `--format` is not given.
    pub format: OutputFormat,

    /// Log filter (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let format = match lookup(FORMAT_ENV) {
            Some(value) => match OutputFormat::parse(&value) {
                Some(format) => format,
                None => bail!("{FORMAT_ENV} must be 'table' or 'json', got '{value}'."),
            },
            None => defaults.format,
        };

        let log_level = lookup(LOG_LEVEL_ENV).unwrap_or(defaults.log_level);

        Ok(Self { format, log_level })
    }
}
