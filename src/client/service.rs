use std::future::Future;

use crate::model::{SavedValuation, ValuationPayload};

use super::error::SaveError;

/// The persistence side of the valuation service.
///
/// Implemented over HTTP by [`HttpValuationClient`](super::HttpValuationClient);
/// tests substitute in-memory fakes.
pub trait ValuationService: Send + Sync + 'static {
    /// Stores a valuation and returns the identifier the service assigned.
    fn save(
        &self,
        payload: &ValuationPayload,
    ) -> impl Future<Output = Result<SavedValuation, SaveError>> + Send;
}
