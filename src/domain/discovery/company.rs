//! Companies available for case-study comparison.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// A company the product idea can be compared against.
///
/// The set is closed; selection UIs list [`CaseStudyCompany::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseStudyCompany {
    Uber,
    Figma,
    Zepto,
    Amazon,
    Tesla,
    Notion,
    Airbnb,
    Stripe,
    Slack,
    Zoom,
}

impl CaseStudyCompany {
    /// Every company in selection order.
    pub const ALL: [CaseStudyCompany; 10] = [
        CaseStudyCompany::Uber,
        CaseStudyCompany::Figma,
        CaseStudyCompany::Zepto,
        CaseStudyCompany::Amazon,
        CaseStudyCompany::Tesla,
        CaseStudyCompany::Notion,
        CaseStudyCompany::Airbnb,
        CaseStudyCompany::Stripe,
        CaseStudyCompany::Slack,
        CaseStudyCompany::Zoom,
    ];

    /// Company name as it appears in prompts.
    pub fn name(&self) -> &'static str {
        match self {
            CaseStudyCompany::Uber => "Uber",
            CaseStudyCompany::Figma => "Figma",
            CaseStudyCompany::Zepto => "Zepto",
            CaseStudyCompany::Amazon => "Amazon",
            CaseStudyCompany::Tesla => "Tesla",
            CaseStudyCompany::Notion => "Notion",
            CaseStudyCompany::Airbnb => "Airbnb",
            CaseStudyCompany::Stripe => "Stripe",
            CaseStudyCompany::Slack => "Slack",
            CaseStudyCompany::Zoom => "Zoom",
        }
    }
}

impl fmt::Display for CaseStudyCompany {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CaseStudyCompany {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CaseStudyCompany::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ValidationError::invalid_value("company", s, "not a case study company")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_ten_companies_in_fixed_order() {
        let names: Vec<_> = CaseStudyCompany::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec![
                "Uber", "Figma", "Zepto", "Amazon", "Tesla", "Notion", "Airbnb", "Stripe",
                "Slack", "Zoom"
            ]
        );
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("notion".parse::<CaseStudyCompany>().unwrap(), CaseStudyCompany::Notion);
        assert_eq!(" AIRBNB ".parse::<CaseStudyCompany>().unwrap(), CaseStudyCompany::Airbnb);
    }

    #[test]
    fn rejects_unknown_company() {
        let err = "Acme".parse::<CaseStudyCompany>().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidValue { .. }));
    }
}
