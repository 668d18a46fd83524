//! Report Exporter Port - Rendering interface for discovery reports.
//!
//! This port defines the contract for turning a [`Report`] into bytes of a
//! given format. The application layer depends on this trait, while adapters
//! (`TextReportExporter`, `PdfReportExporter`) provide the implementation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::discovery::{BundleError, Framework, Report};

/// Base name of every exported report file.
pub const REPORT_BASE_FILENAME: &str = "product-discovery-report";

/// Port for rendering a report in one format.
///
/// # Contract
///
/// Implementations must:
/// - Render sections in the order the report lists them
/// - Return either complete bytes or an error, never partial output
///
/// Rendering is synchronous and CPU-only.
pub trait ReportExporter: Send + Sync {
    /// The format this exporter produces.
    fn format(&self) -> ExportFormat;

    /// Render the report.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if rendering fails.
    fn export(&self, report: &Report) -> Result<Vec<u8>, ExportError>;
}

/// Report formats supported by the exporters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Plain UTF-8 text.
    Text,
    /// PDF document.
    Pdf,
}

impl ExportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Text => "text/plain",
            ExportFormat::Pdf => "application/pdf",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Pdf => "pdf",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "txt" | "text" => Ok(ExportFormat::Text),
            "pdf" => Ok(ExportFormat::Pdf),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Exported report with content and metadata.
#[derive(Debug, Clone)]
pub struct ExportedReport {
    /// The exported content as bytes.
    pub content: Vec<u8>,
    /// The MIME content type.
    pub content_type: &'static str,
    /// File extension without the dot.
    pub extension: &'static str,
    /// Suggested filename for saving.
    pub filename: String,
    /// The format that was used.
    pub format: ExportFormat,
}

impl ExportedReport {
    /// Create a new exported report.
    pub fn new(content: Vec<u8>, format: ExportFormat) -> Self {
        Self {
            content,
            content_type: format.content_type(),
            extension: format.extension(),
            filename: format!("{}.{}", REPORT_BASE_FILENAME, format.extension()),
            format,
        }
    }
}

/// Errors that can occur during report export.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// Unsupported export format requested.
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// The bundle lacks a framework every report needs.
    #[error("Analysis for framework '{0}' is missing")]
    MissingFramework(Framework),

    /// PDF layout or serialization failed.
    #[error("PDF rendering failed: {0}")]
    PdfRenderFailed(String),
}

impl ExportError {
    /// Create a PDF rendering error.
    pub fn pdf_failed(reason: impl Into<String>) -> Self {
        Self::PdfRenderFailed(reason.into())
    }
}

impl From<BundleError> for ExportError {
    fn from(err: BundleError) -> Self {
        match err {
            BundleError::MissingFramework(framework) => ExportError::MissingFramework(framework),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
