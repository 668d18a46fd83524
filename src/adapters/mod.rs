//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the discovery core to external systems:
//! - `ai` - Language model providers (OpenRouter, mock)
//! - `report` - Report exporters (text, PDF)

pub mod ai;
pub mod report;

pub use ai::{MockAIProvider, MockError, OpenRouterConfig, OpenRouterProvider};
pub use report::{PdfReportExporter, TextReportExporter};
