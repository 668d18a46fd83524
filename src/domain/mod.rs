//! Domain layer - Core types and pure logic.
//!
//! Nothing here performs I/O. The application layer drives the language model
//! through ports and hands results to the report exporters.

pub mod discovery;
pub mod foundation;
pub mod pricing;
