use super::error::OpenError;

/// Documents the service renders for a saved valuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    /// HTML preview of the valuation report.
    Preview,
    /// PDF rendition of the valuation report.
    Pdf,
}

impl ReportKind {
    /// Path segment appended after the valuation id.
    pub fn path_segment(self) -> &'static str {
        match self {
            ReportKind::Preview => "preview",
            ReportKind::Pdf => "pdf",
        }
    }

    /// Label used in logs and notifications.
    pub fn label(self) -> &'static str {
        match self {
            ReportKind::Preview => "Preview Report",
            ReportKind::Pdf => "Download PDF",
        }
    }
}

/// Builds `{base}/api/valuations/{id}/{preview|pdf}`.
pub fn report_url(base_url: &str, id: &str, kind: ReportKind) -> String {
    format!(
        "{}/api/valuations/{id}/{}",
        base_url.trim_end_matches('/'),
        kind.path_segment()
    )
}

/// Hands a report URL to something that can display it.
///
/// The form never reads the document itself; opening is fire-and-forget.
pub trait ReportOpener {
    /// Opens `url` for the user.
    fn open(&self, url: &str) -> Result<(), OpenError>;
}

/// Opens URLs with the platform's default handler (usually the browser).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl ReportOpener for SystemOpener {
    #[mutants::skip]
    fn open(&self, url: &str) -> Result<(), OpenError> {
        open::that_detached(url).map_err(|source| OpenError {
            url: url.to_string(),
            source,
        })
    }
}
