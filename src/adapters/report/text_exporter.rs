//! Plain-text report exporter.

use crate::domain::discovery::Report;
use crate::ports::{ExportError, ExportFormat, ReportExporter};

const RULE_WIDTH: usize = 80;

/// Renders reports as UTF-8 text with fixed-width rules under each heading.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReportExporter;

impl TextReportExporter {
    pub fn new() -> Self {
        Self
    }

    /// Renders the report to a string.
    ///
    /// The layout is a list of lines joined with `\n`; spacer entries are
    /// themselves `"\n"`, which leaves two blank lines between blocks.
    pub fn render(&self, report: &Report) -> String {
        let double_rule = "=".repeat(RULE_WIDTH);
        let single_rule = "-".repeat(RULE_WIDTH);

        let mut lines: Vec<String> = vec![
            double_rule.clone(),
            report.title().to_uppercase(),
            double_rule,
            report.generated_on_line(),
            "\n".to_string(),
            "PRODUCT IDEA".to_string(),
            single_rule.clone(),
            report.product_idea().to_string(),
            "\n".to_string(),
        ];

        for section in report.sections() {
            lines.push(section.heading.to_uppercase());
            lines.push(single_rule.clone());
            lines.push(section.body.clone());
            lines.push("\n".to_string());
        }

        lines.join("\n")
    }
}

impl ReportExporter for TextReportExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Text
    }

    fn export(&self, report: &Report) -> Result<Vec<u8>, ExportError> {
        Ok(self.render(report).into_bytes())
    }
}
