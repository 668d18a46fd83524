//! Ports - Interfaces between the discovery core and external systems.
//!
//! # Ports
//!
//! - `AIProvider` - Hosted language model completions
//! - `ReportExporter` - Rendering a report to bytes of one format

mod ai_provider;
mod report_exporter;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, RequestMetadata, TokenUsage,
};
pub use report_exporter::{
    ExportError, ExportFormat, ExportedReport, ReportExporter, REPORT_BASE_FILENAME,
};
