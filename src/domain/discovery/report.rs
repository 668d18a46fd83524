//! Reader-facing report assembled from an analysis bundle.
//!
//! Both the text and PDF exporters render this model, so section order and
//! failure rendering are decided once here.

use chrono::NaiveDateTime;

use super::{AnalysisBundle, BundleError, Framework, ProductIdea};

/// Title printed at the top of every report.
pub const REPORT_TITLE: &str = "Product Discovery Strategy Report";

/// Timestamp layout used in the "Generated on" line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One framework section of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub framework: Framework,
    pub heading: &'static str,
    pub body: String,
}

/// A complete report ready for rendering.
///
/// Sections always follow [`Framework::ALL`]. Case-study output is never part
/// of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    title: &'static str,
    generated_at: NaiveDateTime,
    product_idea: String,
    sections: Vec<ReportSection>,
}

impl Report {
    /// Builds a report from a bundle.
    ///
    /// # Errors
    ///
    /// Returns `BundleError::MissingFramework` for the first framework (in
    /// report order) without a result.
    pub fn from_bundle(
        product_idea: &ProductIdea,
        bundle: &AnalysisBundle,
        generated_at: NaiveDateTime,
    ) -> Result<Self, BundleError> {
        let sections = Framework::ALL
            .into_iter()
            .map(|framework| {
                let result = bundle.require(framework)?;
                Ok(ReportSection {
                    framework,
                    heading: framework.report_heading(),
                    body: result.analysis_text().into_owned(),
                })
            })
            .collect::<Result<Vec<_>, BundleError>>()?;

        Ok(Self {
            title: REPORT_TITLE,
            generated_at,
            product_idea: product_idea.as_str().to_string(),
            sections,
        })
    }

    pub fn title(&self) -> &str {
        self.title
    }

    /// `Generated on: <timestamp>`.
    pub fn generated_on_line(&self) -> String {
        format!("Generated on: {}", self.generated_at.format(TIMESTAMP_FORMAT))
    }

    pub fn product_idea(&self) -> &str {
        &self.product_idea
    }

    pub fn sections(&self) -> &[ReportSection] {
        &self.sections
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
