//! Product Discovery - Strategy framework analysis for product ideas
//!
//! This crate runs a product idea through four business-strategy frameworks
//! (Jobs to Be Done, Value Proposition Canvas, Opportunity Solution Tree and
//! the 4-Fit Model) using a hosted language model, and exports the results as
//! text or PDF reports. A small seat-pricing utility lives alongside it.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
