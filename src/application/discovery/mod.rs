//! Discovery use cases: completions, framework analysis and report export.

mod completion_client;
mod discovery_analyzer;
mod report_service;

pub use completion_client::{CompletionClient, DEFAULT_MAX_TOKENS};
pub use discovery_analyzer::DiscoveryAnalyzer;
pub use report_service::ReportService;
