//! Application layer - Use cases over the discovery domain.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod discovery;

pub use discovery::{CompletionClient, DiscoveryAnalyzer, ReportService, DEFAULT_MAX_TOKENS};
