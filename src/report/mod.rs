//! Scenario reports.
//!
//! A report is laid out once as a [`ReportDocument`] and then rendered by a
//! [`ReportRenderer`]. The production renderer emits PDF.

mod document;
mod pdf;

pub use document::{
    ReportDocument, ReportLine, ReportSection, format_currency, format_months, format_number,
    format_percent,
};
pub use pdf::PdfReportRenderer;

use crate::error::RoiResult;

/// Turns a laid-out report into a downloadable document.
pub trait ReportRenderer: Send + Sync {
    /// Renders the document to bytes.
    fn render(&self, document: &ReportDocument) -> RoiResult<Vec<u8>>;

    /// The MIME type of the rendered bytes.
    fn content_type(&self) -> &'static str;

    /// The file extension used for downloads.
    fn file_extension(&self) -> &'static str;
}
