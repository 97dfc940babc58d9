//! Command-line and environment configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::client::DEFAULT_BASE_URL;
use crate::controller::DEFAULT_DURATION;

/// Errors turning command-line input into a [`Config`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The service address is not an http(s) URL.
    #[error("invalid service address '{0}': expected http:// or https://")]
    InvalidBaseUrl(String),

    /// A request timeout of zero seconds was requested.
    #[error("request timeout must be at least one second")]
    ZeroTimeout,

    /// No log file was given and the platform has no data directory.
    #[error("could not determine XDG data directory for the log file")]
    NoDataDir,
}

/// Raw command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "propval",
    about = "Capture property valuations and submit them to the valuation service",
    version
)]
pub struct Cli {
    /// Base address of the valuation service
    #[arg(long, env = "PROPVAL_API_BASE", default_value = DEFAULT_BASE_URL)]
    pub api_base: String,

    /// Seconds to wait for the service before reporting a network error
    #[arg(long, env = "PROPVAL_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// How long notifications stay on screen, in milliseconds
    #[arg(long, env = "PROPVAL_TOAST_MS", default_value_t = DEFAULT_DURATION.as_millis() as u64)]
    pub toast_ms: u64,

    /// Where to write the log (defaults to the XDG data directory)
    #[arg(long, env = "PROPVAL_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level or tracing filter directive
    #[arg(long, env = "PROPVAL_LOG", default_value = "info")]
    pub log_level: String,
}

/// Validated runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base: String,
    pub timeout: Duration,
    pub toast_duration: Duration,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl Config {
    /// Validates `cli`, filling in the default log location.
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let api_base = normalize_base_url(&cli.api_base)?;
        if cli.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        let log_file = match cli.log_file {
            Some(path) => path,
            None => default_log_file()?,
        };
        Ok(Self {
            api_base,
            timeout: Duration::from_secs(cli.timeout_secs),
            toast_duration: Duration::from_millis(cli.toast_ms),
            log_file,
            log_level: cli.log_level,
        })
    }
}

/// Trims whitespace and trailing slashes, and requires an http(s) scheme.
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let has_host = ["http://", "https://"]
        .iter()
        .any(|scheme| trimmed.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()));
    if has_host {
        Ok(trimmed.to_string())
    } else {
        Err(ConfigError::InvalidBaseUrl(raw.to_string()))
    }
}

/// `~/.local/share/propval/propval.log` on Linux.
fn default_log_file() -> Result<PathBuf, ConfigError> {
    let data_dir = dirs::data_dir().ok_or(ConfigError::NoDataDir)?;
    Ok(data_dir.join("propval").join("propval.log"))
}
