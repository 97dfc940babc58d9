use crate::client::ClientError;
use crate::config::ConfigError;
use crate::telemetry::TelemetryError;

/// Errors that stop the application.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An I/O error occurred (terminal, event reading, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The command-line configuration is invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be set up.
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    /// The HTTP client could not be created.
    #[error("client error: {0}")]
    Client(#[from] ClientError),
}
