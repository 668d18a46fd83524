//! Integration tests for the discovery flow.
//!
//! These tests drive the analyzer and report service together through the
//! mock provider:
//! 1. Every framework produces a result, even when completions fail
//! 2. Failures surface in reports as "Error in analysis: ..."
//! 3. Reports list frameworks in fixed order and leave out the case study

use std::sync::Arc;

use chrono::NaiveDate;

use product_discovery::adapters::ai::{MockAIProvider, MockError};
use product_discovery::application::{CompletionClient, DiscoveryAnalyzer, ReportService};
use product_discovery::domain::discovery::{
    AnalysisBundle, AnalysisRequest, Answers, CaseStudyCompany, Framework, ProductIdea,
};
use product_discovery::ports::{ExportError, ExportFormat};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn scripted_provider() -> MockAIProvider {
    MockAIProvider::new()
        .with_response_when("Jobs to Be Done (JTBD)", "JTBD: commuters want reliable meals")
        .with_response_when("Value Proposition Canvas", "VPC: pains are time and cost")
        .with_response_when("Opportunity Solution Tree", "OST: outcome is weekly retention")
        .with_response_when("4-Fit Model", "FIT: channel fit is weakest")
        .with_response_when("Compare the following product idea", "CASE STUDY TEXT")
}

fn request() -> AnalysisRequest {
    AnalysisRequest::new(
        ProductIdea::new("Meal kits for night-shift nurses").unwrap(),
        Answers::new()
            .with("q1", "Nurses on rotating shifts")
            .with("q2", "They skip meals"),
    )
}

fn text_report(bundle: &AnalysisBundle) -> String {
    let generated_at = NaiveDate::from_ymd_opt(2024, 2, 29)
        .and_then(|d| d.and_hms_opt(23, 59, 59))
        .unwrap();
    let report = ReportService::new()
        .generate_report_at(
            &ProductIdea::new("Meal kits for night-shift nurses").unwrap(),
            bundle,
            ExportFormat::Text,
            generated_at,
        )
        .unwrap();
    String::from_utf8(report.content).unwrap()
}

// =============================================================================
// Analysis
// =============================================================================

#[tokio::test]
async fn discovery_with_case_study_fills_bundle() {
    let mock = Arc::new(scripted_provider());
    let analyzer = DiscoveryAnalyzer::new(CompletionClient::new(mock.clone()));

    let bundle = analyzer
        .run_discovery(&request(), Some(CaseStudyCompany::Notion))
        .await;

    assert!(bundle.is_complete());
    assert_eq!(bundle.failure_count(), 0);
    assert_eq!(
        bundle.get(Framework::FourFit).unwrap().analysis_text(),
        "FIT: channel fit is weakest"
    );
    let case_study = bundle.case_study().unwrap();
    assert_eq!(case_study.company(), CaseStudyCompany::Notion);
    assert_eq!(case_study.analysis_text(), "CASE STUDY TEXT");
    assert_eq!(mock.call_count(), 5);

    for call in mock.get_calls() {
        let prompt = call.user_prompt().unwrap();
        assert!(prompt.contains("Meal kits for night-shift nurses"));
        assert!(prompt.contains("\"q2\": \"They skip meals\""));
    }
}

#[tokio::test]
async fn failing_framework_is_reported_in_band() {
    // Rules are checked in insertion order, so the failing rule comes first.
    let mock = Arc::new(
        MockAIProvider::new()
            .with_error_when(
                "Value Proposition Canvas",
                MockError::RateLimited {
                    retry_after_secs: 20,
                },
            )
            .with_response_when("Jobs to Be Done (JTBD)", "JTBD ok")
            .with_response_when("Opportunity Solution Tree", "OST ok")
            .with_response_when("4-Fit Model", "FIT ok"),
    );
    let analyzer = DiscoveryAnalyzer::new(CompletionClient::new(mock));

    let bundle = analyzer.analyze_all_frameworks(&request()).await;
    let text = text_report(&bundle);

    assert_eq!(bundle.failure_count(), 1);
    assert!(text.contains("VALUE PROPOSITION CANVAS\n"));
    assert!(text.contains("Error in analysis: rate limited: retry after 20s"));
    assert!(text.contains("JTBD ok"));
    assert!(text.contains("OST ok"));
    assert!(text.contains("FIT ok"));
}

// =============================================================================
// Reports
// =============================================================================

#[tokio::test]
async fn text_report_orders_frameworks_and_omits_case_study() {
    let mock = Arc::new(scripted_provider());
    let analyzer = DiscoveryAnalyzer::new(CompletionClient::new(mock));

    let bundle = analyzer
        .run_discovery(&request(), Some(CaseStudyCompany::Tesla))
        .await;
    let text = text_report(&bundle);

    let order: Vec<usize> = [
        "PRODUCT IDEA",
        "JOBS TO BE DONE ANALYSIS",
        "JTBD: commuters",
        "VALUE PROPOSITION CANVAS",
        "VPC: pains",
        "OPPORTUNITY SOLUTION TREE",
        "OST: outcome",
        "4-FIT MODEL ASSESSMENT",
        "FIT: channel",
    ]
    .iter()
    .map(|needle| text.find(needle).unwrap())
    .collect();
    assert!(order.windows(2).all(|w| w[0] < w[1]));

    assert!(text.contains("Generated on: 2024-02-29 23:59:59"));
    assert!(!text.contains("CASE STUDY TEXT"));
}

#[tokio::test]
async fn pdf_report_is_generated_for_full_bundle() {
    let analyzer = DiscoveryAnalyzer::new(CompletionClient::new(Arc::new(scripted_provider())));
    let req = request();

    let bundle = analyzer.analyze_all_frameworks(&req).await;
    let report = ReportService::new()
        .generate_report(req.product_idea(), &bundle, ExportFormat::Pdf)
        .unwrap();

    assert_eq!(report.filename, "product-discovery-report.pdf");
    assert_eq!(report.content_type, "application/pdf");
    assert!(report.content.starts_with(b"%PDF"));
}

#[test]
fn unknown_report_format_is_rejected() {
    assert_eq!(
        "docx".parse::<ExportFormat>(),
        Err(ExportError::UnsupportedFormat("docx".to_string()))
    );
}

#[tokio::test]
async fn exported_report_round_trips_through_disk() {
    let analyzer = DiscoveryAnalyzer::new(CompletionClient::new(Arc::new(scripted_provider())));
    let req = request();
    let bundle = analyzer.analyze_all_frameworks(&req).await;

    let report = ReportService::new()
        .generate_report(req.product_idea(), &bundle, ExportFormat::Text)
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(&report.filename);
    std::fs::write(&path, &report.content).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("PRODUCT DISCOVERY STRATEGY REPORT"));
    assert!(written.contains("Meal kits for night-shift nurses"));
}
