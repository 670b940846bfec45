//! Statement presentation.
//!
//! Presenters consume the aggregation bundle as-is; nothing is recomputed at
//! render time. The HTML renderer backs the export endpoint.

pub mod html;

pub use html::HtmlStatementRenderer;

use rust_decimal::Decimal;

use crate::statement::StatementBundle;

/// A finished, downloadable statement document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// MIME content type of the document body.
    pub content_type: &'static str,
    /// Suggested download file name.
    pub file_name: String,
    /// Document body.
    pub body: Vec<u8>,
}

/// Renders an aggregation bundle into a finished document.
pub trait StatementRenderer: Send + Sync {
    /// Produces the document for one statement bundle.
    fn render(&self, bundle: &StatementBundle) -> RenderedDocument;
}

/// Formats a monetary amount with two decimal places for presentation.
#[must_use]
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}
