//! Report exporter adapters.
//!
//! - `TextReportExporter` - Plain UTF-8 text with ruled headings
//! - `PdfReportExporter` - Letter-size PDF set in Helvetica via `printpdf`

mod font_metrics;
mod pdf_exporter;
mod text_exporter;

pub use font_metrics::Face;
pub use pdf_exporter::{PageLayout, PdfReportExporter, PlacedLine, MARGIN, PAGE_HEIGHT, PAGE_WIDTH};
pub use text_exporter::TextReportExporter;
