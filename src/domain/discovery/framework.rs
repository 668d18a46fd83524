//! Strategy frameworks run against every product idea.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One of the four fixed business-strategy frameworks.
///
/// Variant order is the order frameworks appear in every report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Framework {
    /// Jobs to Be Done.
    Jtbd,
    /// Value Proposition Canvas.
    ValueProposition,
    /// Opportunity Solution Tree (Teresa Torres).
    OpportunitySolution,
    /// 4-Fit Model.
    FourFit,
}

impl Framework {
    /// All frameworks in report order.
    pub const ALL: [Framework; 4] = [
        Framework::Jtbd,
        Framework::ValueProposition,
        Framework::OpportunitySolution,
        Framework::FourFit,
    ];

    /// Stable key used in serialized bundles.
    pub fn key(&self) -> &'static str {
        match self {
            Framework::Jtbd => "jtbd",
            Framework::ValueProposition => "value_proposition",
            Framework::OpportunitySolution => "opportunity_solution",
            Framework::FourFit => "four_fit",
        }
    }

    /// Human-readable framework name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::Jtbd => "Jobs to Be Done",
            Framework::ValueProposition => "Value Proposition Canvas",
            Framework::OpportunitySolution => "Opportunity Solution Tree",
            Framework::FourFit => "4-Fit Model",
        }
    }

    /// Section heading used in exported reports.
    pub fn report_heading(&self) -> &'static str {
        match self {
            Framework::Jtbd => "Jobs to Be Done Analysis",
            Framework::ValueProposition => "Value Proposition Canvas",
            Framework::OpportunitySolution => "Opportunity Solution Tree",
            Framework::FourFit => "4-Fit Model Assessment",
        }
    }

    /// One-line explanation shown above the analysis.
    pub fn subtitle(&self) -> &'static str {
        match self {
            Framework::Jtbd => "Understanding what jobs your users are trying to get done",
            Framework::ValueProposition => "Mapping customer needs to your value proposition",
            Framework::OpportunitySolution => "Identifying opportunities and potential solutions",
            Framework::FourFit => "Evaluating product-market fit and business model",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Framework {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Framework::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::invalid_value("framework", s, "unknown framework"))
    }
}
