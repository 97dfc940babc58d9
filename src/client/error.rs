use crate::model::ValidationErrors;

/// Why a save request did not produce a stored valuation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveError {
    /// The service answered 400 with a field-error object.
    #[error("service rejected {} field(s)", .0.len())]
    Validation(ValidationErrors),

    /// Any other non-success response, or a success without a usable id.
    #[error("HTTP {status}: {detail}")]
    Rejected {
        /// HTTP status code of the response.
        status: u16,
        /// Body text when present, otherwise the status reason.
        detail: String,
    },

    /// No response was obtained (connect failure, timeout, broken body).
    #[error("network error: {0}")]
    Network(String),
}

/// Errors constructing the HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The underlying HTTP client could not be built.
    #[error("could not build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Errors handing a report URL to the system opener.
#[derive(Debug, thiserror::Error)]
#[error("could not open {url}: {source}")]
pub struct OpenError {
    /// The URL that failed to open.
    pub url: String,
    /// The launcher failure.
    #[source]
    pub source: std::io::Error,
}
