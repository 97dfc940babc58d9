//! Client side of the valuation service contract: save, preview, and download.

mod error;
mod http;
mod report;
mod service;

pub use error::{ClientError, OpenError, SaveError};
pub use http::{DEFAULT_BASE_URL, HttpValuationClient, classify_response};
pub use report::{ReportKind, ReportOpener, SystemOpener, report_url};
pub use service::ValuationService;
