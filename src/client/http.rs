//! HTTP implementation of the valuation service contract.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::model::{SavedValuation, ValidationErrors, ValuationPayload};

use super::error::{ClientError, SaveError};
use super::service::ValuationService;

/// Base address used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Longest failure detail kept from a response body.
const MAX_DETAIL_CHARS: usize = 200;

/// Talks to the valuation service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpValuationClient {
    client: Client,
    base_url: String,
}

impl HttpValuationClient {
    /// Creates a client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// Returns the service base address without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn valuations_url(&self) -> String {
        format!("{}/api/valuations", self.base_url)
    }
}

impl ValuationService for HttpValuationClient {
    async fn save(&self, payload: &ValuationPayload) -> Result<SavedValuation, SaveError> {
        let url = self.valuations_url();
        debug!(%url, "posting valuation");

        let response = match self.client.post(&url).json(payload).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "save request did not complete");
                return Err(SaveError::Network(e.to_string()));
            }
        };

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            warn!(error = %e, "could not read save response body");
            SaveError::Network(e.to_string())
        })?;

        classify_response(status.as_u16(), status.canonical_reason(), &body)
    }
}

/// Interprets a save response.
///
/// - 2xx with an `id`: success.
/// - 400 whose body is a JSON object: field-level validation failure.
/// - Anything else (including a 400 with a non-object body): generic
///   rejection carrying the body text, or the status reason when the body is
///   blank.
pub fn classify_response(
    status: u16,
    reason: Option<&str>,
    body: &str,
) -> Result<SavedValuation, SaveError> {
    if (200..300).contains(&status) {
        return match serde_json::from_str::<SavedValuation>(body) {
            Ok(saved) if !saved.id.is_empty() => Ok(saved),
            Ok(_) | Err(_) => Err(SaveError::Rejected {
                status,
                detail: "response did not include a valuation id".to_string(),
            }),
        };
    }

    if status == 400
        && let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body)
    {
        return Err(SaveError::Validation(ValidationErrors::from_server_map(map)));
    }

    Err(SaveError::Rejected {
        status,
        detail: failure_detail(reason, body),
    })
}

fn failure_detail(reason: Option<&str>, body: &str) -> String {
    let fallback = || reason.unwrap_or("unknown error").to_string();
    let collapsed = body.split_whitespace().collect::<Vec<_>>().join(" ");
    // Proxy error pages carry nothing readable once flattened.
    if collapsed.is_empty() || collapsed.starts_with('<') {
        return fallback();
    }
    if collapsed.chars().count() > MAX_DETAIL_CHARS {
        let truncated: String = collapsed.chars().take(MAX_DETAIL_CHARS).collect();
        format!("{truncated}…")
    } else {
        collapsed
    }
}
