//! Discovery module - Product ideas, strategy frameworks and their results.
//!
//! # Components
//!
//! - `Framework` - The four fixed strategy frameworks, in report order
//! - `CaseStudyCompany` - Closed set of companies for comparisons
//! - `AnalysisRequest` - Product idea plus follow-up answers
//! - `AnalysisBundle` - Merged per-framework results and optional case study
//! - `Report` - Reader-facing view of a bundle shared by all exporters
//! - `prompts` - Pure prompt builders for every completion the analyzer makes

mod company;
mod framework;
pub mod prompts;
mod report;
mod request;
mod results;

pub use company::CaseStudyCompany;
pub use framework::Framework;
pub use report::{Report, ReportSection, REPORT_TITLE, TIMESTAMP_FORMAT};
pub use request::{AnalysisRequest, Answers, FollowUpQuestions, ProductIdea};
pub use results::{
    AnalysisBundle, AnalysisFailure, BundleError, CaseStudyResult, FrameworkResult,
    ANALYSIS_ERROR_PREFIX,
};
