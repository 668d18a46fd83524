//! Analysis outputs: per-framework results, the case study and the merged bundle.

use std::borrow::Cow;
use std::collections::BTreeMap;

use thiserror::Error;

use super::{CaseStudyCompany, Framework};

/// Prefix shown to readers wherever a completion failed.
pub const ANALYSIS_ERROR_PREFIX: &str = "Error in analysis: ";

/// A completion that could not be produced.
///
/// Rendered in-band (`Error in analysis: <details>`) so failures stay visible
/// in reports without being mistaken for model output by calling code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error in analysis: {details}")]
pub struct AnalysisFailure {
    details: String,
}

impl AnalysisFailure {
    pub fn new(details: impl Into<String>) -> Self {
        Self {
            details: details.into(),
        }
    }

    pub fn details(&self) -> &str {
        &self.details
    }
}

/// Renders an outcome as reader-facing text.
fn render(outcome: &Result<String, AnalysisFailure>) -> Cow<'_, str> {
    match outcome {
        Ok(text) => Cow::Borrowed(text.as_str()),
        Err(failure) => Cow::Owned(failure.to_string()),
    }
}

/// Output of one framework for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameworkResult {
    framework: Framework,
    outcome: Result<String, AnalysisFailure>,
}

impl FrameworkResult {
    pub fn new(framework: Framework, outcome: Result<String, AnalysisFailure>) -> Self {
        Self { framework, outcome }
    }

    pub fn succeeded(framework: Framework, analysis: impl Into<String>) -> Self {
        Self::new(framework, Ok(analysis.into()))
    }

    pub fn failed(framework: Framework, failure: AnalysisFailure) -> Self {
        Self::new(framework, Err(failure))
    }

    pub fn framework(&self) -> Framework {
        self.framework
    }

    pub fn outcome(&self) -> &Result<String, AnalysisFailure> {
        &self.outcome
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The analysis text, or the rendered failure.
    pub fn analysis_text(&self) -> Cow<'_, str> {
        render(&self.outcome)
    }
}

/// Comparison of the product idea against one case-study company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseStudyResult {
    company: CaseStudyCompany,
    outcome: Result<String, AnalysisFailure>,
}

impl CaseStudyResult {
    pub fn new(company: CaseStudyCompany, outcome: Result<String, AnalysisFailure>) -> Self {
        Self { company, outcome }
    }

    pub fn company(&self) -> CaseStudyCompany {
        self.company
    }

    pub fn outcome(&self) -> &Result<String, AnalysisFailure> {
        &self.outcome
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn analysis_text(&self) -> Cow<'_, str> {
        render(&self.outcome)
    }
}

/// Missing data detected when a bundle is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BundleError {
    #[error("analysis for framework '{0}' is missing")]
    MissingFramework(Framework),
}

/// All results for one request.
///
/// Frameworks iterate in report order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisBundle {
    frameworks: BTreeMap<Framework, FrameworkResult>,
    case_study: Option<CaseStudyResult>,
}

impl AnalysisBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects framework results; a later result for the same framework wins.
    pub fn from_results(results: impl IntoIterator<Item = FrameworkResult>) -> Self {
        let mut bundle = Self::new();
        for result in results {
            bundle.insert(result);
        }
        bundle
    }

    pub fn insert(&mut self, result: FrameworkResult) {
        self.frameworks.insert(result.framework(), result);
    }

    pub fn with_case_study(mut self, case_study: CaseStudyResult) -> Self {
        self.case_study = Some(case_study);
        self
    }

    pub fn set_case_study(&mut self, case_study: CaseStudyResult) {
        self.case_study = Some(case_study);
    }

    pub fn get(&self, framework: Framework) -> Option<&FrameworkResult> {
        self.frameworks.get(&framework)
    }

    /// Like [`AnalysisBundle::get`] but treats absence as an error.
    pub fn require(&self, framework: Framework) -> Result<&FrameworkResult, BundleError> {
        self.get(framework)
            .ok_or(BundleError::MissingFramework(framework))
    }

    pub fn frameworks(&self) -> impl Iterator<Item = &FrameworkResult> {
        self.frameworks.values()
    }

    pub fn case_study(&self) -> Option<&CaseStudyResult> {
        self.case_study.as_ref()
    }

    /// True once every framework has a result.
    pub fn is_complete(&self) -> bool {
        Framework::ALL.iter().all(|f| self.frameworks.contains_key(f))
    }

    pub fn missing_frameworks(&self) -> Vec<Framework> {
        Framework::ALL
            .into_iter()
            .filter(|f| !self.frameworks.contains_key(f))
            .collect()
    }

    pub fn failure_count(&self) -> usize {
        self.frameworks.values().filter(|r| !r.is_success()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_bundle() -> AnalysisBundle {
        AnalysisBundle::from_results(
            Framework::ALL
                .into_iter()
                .map(|f| FrameworkResult::succeeded(f, format!("{} text", f.key()))),
        )
    }

    #[test]
    fn failure_renders_with_prefix() {
        let failure = AnalysisFailure::new("authentication failed");
        assert_eq!(failure.to_string(), "Error in analysis: authentication failed");
        assert!(failure.to_string().starts_with(ANALYSIS_ERROR_PREFIX));
    }

    #[test]
    fn failed_result_text_is_the_rendered_failure() {
        let result =
            FrameworkResult::failed(Framework::Jtbd, AnalysisFailure::new("network error: boom"));
        assert!(!result.is_success());
        assert_eq!(result.analysis_text(), "Error in analysis: network error: boom");
    }

    #[test]
    fn successful_result_text_is_borrowed_verbatim() {
        let result = FrameworkResult::succeeded(Framework::FourFit, "- Channel Fit: Risky");
        assert!(matches!(result.analysis_text(), Cow::Borrowed("- Channel Fit: Risky")));
    }

    #[test]
    fn bundle_iterates_in_report_order() {
        let bundle = AnalysisBundle::from_results(vec![
            FrameworkResult::succeeded(Framework::FourFit, "d"),
            FrameworkResult::succeeded(Framework::Jtbd, "a"),
            FrameworkResult::succeeded(Framework::OpportunitySolution, "c"),
            FrameworkResult::succeeded(Framework::ValueProposition, "b"),
        ]);

        let order: Vec<_> = bundle.frameworks().map(|r| r.framework()).collect();
        assert_eq!(order, Framework::ALL.to_vec());
    }

    #[test]
    fn bundle_reports_missing_frameworks() {
        let bundle = AnalysisBundle::from_results(vec![FrameworkResult::succeeded(
            Framework::Jtbd,
            "a",
        )]);

        assert!(!bundle.is_complete());
        assert_eq!(
            bundle.missing_frameworks(),
            vec![
                Framework::ValueProposition,
                Framework::OpportunitySolution,
                Framework::FourFit
            ]
        );
        assert_eq!(
            bundle.require(Framework::FourFit),
            Err(BundleError::MissingFramework(Framework::FourFit))
        );
    }

    #[test]
    fn complete_bundle_counts_failures() {
        let mut bundle = full_bundle();
        assert!(bundle.is_complete());
        assert_eq!(bundle.failure_count(), 0);

        bundle.insert(FrameworkResult::failed(
            Framework::ValueProposition,
            AnalysisFailure::new("timeout"),
        ));
        assert_eq!(bundle.failure_count(), 1);
        assert_eq!(bundle.frameworks().count(), 4);
    }

    #[test]
    fn case_study_is_optional() {
        let bundle = full_bundle();
        assert!(bundle.case_study().is_none());

        let bundle = bundle.with_case_study(CaseStudyResult::new(
            CaseStudyCompany::Stripe,
            Ok("Stripe focuses on developers".to_string()),
        ));
        assert_eq!(bundle.case_study().unwrap().company(), CaseStudyCompany::Stripe);
    }
}
