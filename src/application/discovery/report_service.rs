//! ReportService - Builds a report from a bundle and hands it to the exporter
//! for the requested format.

use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use tracing::{error, info};

use crate::adapters::report::{PdfReportExporter, TextReportExporter};
use crate::domain::discovery::{AnalysisBundle, ProductIdea, Report};
use crate::ports::{ExportError, ExportFormat, ExportedReport, ReportExporter};

/// Dispatches to one exporter per format.
///
/// # Usage
///
/// ```rust,ignore
/// let service = ReportService::new();
/// let report = service.generate_report(&idea, &bundle, ExportFormat::Pdf)?;
/// std::fs::write(&report.filename, &report.content)?;
/// ```
#[derive(Clone)]
pub struct ReportService {
    exporters: Vec<Arc<dyn ReportExporter>>,
}

impl Default for ReportService {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportService {
    /// Service with the text and PDF exporters.
    pub fn new() -> Self {
        Self::with_exporters(vec![
            Arc::new(TextReportExporter::new()),
            Arc::new(PdfReportExporter::new()),
        ])
    }

    pub fn with_exporters(exporters: Vec<Arc<dyn ReportExporter>>) -> Self {
        Self { exporters }
    }

    pub fn supports(&self, format: ExportFormat) -> bool {
        self.exporter_for(format).is_some()
    }

    fn exporter_for(&self, format: ExportFormat) -> Option<&Arc<dyn ReportExporter>> {
        self.exporters.iter().find(|e| e.format() == format)
    }

    /// Generates a report stamped with the current local time.
    pub fn generate_report(
        &self,
        product_idea: &ProductIdea,
        bundle: &AnalysisBundle,
        format: ExportFormat,
    ) -> Result<ExportedReport, ExportError> {
        self.generate_report_at(product_idea, bundle, format, Local::now().naive_local())
    }

    /// Generates a report stamped with `generated_at`.
    ///
    /// # Errors
    ///
    /// - `MissingFramework` if the bundle lacks any framework
    /// - `UnsupportedFormat` if no exporter handles `format`
    /// - `PdfRenderFailed` if PDF output fails
    pub fn generate_report_at(
        &self,
        product_idea: &ProductIdea,
        bundle: &AnalysisBundle,
        format: ExportFormat,
        generated_at: NaiveDateTime,
    ) -> Result<ExportedReport, ExportError> {
        let exporter = self
            .exporter_for(format)
            .ok_or_else(|| ExportError::UnsupportedFormat(format.to_string()))?;

        let result = Report::from_bundle(product_idea, bundle, generated_at)
            .map_err(ExportError::from)
            .and_then(|report| exporter.export(&report));

        match result {
            Ok(content) => {
                info!(format = %format, bytes = content.len(), "Report generated");
                Ok(ExportedReport::new(content, format))
            }
            Err(err) => {
                error!(format = %format, error = %err, "Report generation failed");
                Err(err)
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::discovery::{
        CaseStudyCompany, CaseStudyResult, Framework, FrameworkResult,
    };

    fn idea() -> ProductIdea {
        ProductIdea::new("Marketplace for used lab equipment").unwrap()
    }

    fn full_bundle() -> AnalysisBundle {
        AnalysisBundle::from_results(
            Framework::ALL
                .into_iter()
                .map(|f| FrameworkResult::succeeded(f, format!("{} analysis", f.display_name()))),
        )
    }

    #[test]
    fn text_report_has_text_metadata() {
        let report = ReportService::new()
            .generate_report(&idea(), &full_bundle(), ExportFormat::Text)
            .unwrap();

        assert_eq!(report.content_type, "text/plain");
        assert_eq!(report.extension, "txt");
        assert_eq!(report.filename, "product-discovery-report.txt");
        let text = String::from_utf8(report.content).unwrap();
        assert!(text.contains("Marketplace for used lab equipment"));
        assert!(text.contains("Generated on: "));
    }

    #[test]
    fn pdf_report_has_pdf_metadata() {
        let report = ReportService::new()
            .generate_report(&idea(), &full_bundle(), ExportFormat::Pdf)
            .unwrap();

        assert_eq!(report.content_type, "application/pdf");
        assert_eq!(report.extension, "pdf");
        assert!(report.content.starts_with(b"%PDF"));
    }

    #[test]
    fn missing_framework_is_an_error() {
        let bundle = AnalysisBundle::from_results([FrameworkResult::succeeded(
            Framework::Jtbd,
            "only one",
        )]);

        for format in [ExportFormat::Text, ExportFormat::Pdf] {
            let err = ReportService::new()
                .generate_report(&idea(), &bundle, format)
                .unwrap_err();
            assert_eq!(err, ExportError::MissingFramework(Framework::ValueProposition));
        }
    }

    #[test]
    fn case_study_is_left_out_of_text_report() {
        let bundle = full_bundle().with_case_study(CaseStudyResult::new(
            CaseStudyCompany::Figma,
            Ok("FIGMA COMPARISON".to_string()),
        ));

        let report = ReportService::new()
            .generate_report(&idea(), &bundle, ExportFormat::Text)
            .unwrap();

        let text = String::from_utf8(report.content).unwrap();
        assert!(!text.contains("FIGMA COMPARISON"));
    }

    #[test]
    fn format_without_exporter_is_unsupported() {
        let service = ReportService::with_exporters(vec![Arc::new(TextReportExporter::new())]);

        assert!(service.supports(ExportFormat::Text));
        assert!(!service.supports(ExportFormat::Pdf));
        let err = service
            .generate_report(&idea(), &full_bundle(), ExportFormat::Pdf)
            .unwrap_err();
        assert_eq!(err, ExportError::UnsupportedFormat("pdf".to_string()));
    }
}
