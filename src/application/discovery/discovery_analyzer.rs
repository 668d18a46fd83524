//! DiscoveryAnalyzer - Runs the strategy frameworks for a product idea.
//!
//! # Flow
//!
//! 1. `follow_up_questions` asks the model what else it needs to know
//! 2. `analyze_all_frameworks` fans out one completion per framework and
//!    merges the outcomes into an `AnalysisBundle`
//! 3. `analyze_case_study` optionally compares the idea to a known company
//!
//! A failed completion only affects its own framework; the bundle always
//! carries a result for each of the four.

use futures::future::join_all;
use tracing::{info, info_span, Instrument};

use super::CompletionClient;
use crate::domain::discovery::prompts::{
    case_study_prompt, follow_up_questions_prompt, framework_prompt,
};
use crate::domain::discovery::{
    AnalysisBundle, AnalysisFailure, AnalysisRequest, CaseStudyCompany, CaseStudyResult,
    FollowUpQuestions, Framework, FrameworkResult, ProductIdea,
};
use crate::domain::foundation::RequestId;
use crate::ports::RequestMetadata;

/// Stateless between requests; share freely.
#[derive(Clone)]
pub struct DiscoveryAnalyzer {
    client: CompletionClient,
}

impl DiscoveryAnalyzer {
    pub fn new(client: CompletionClient) -> Self {
        Self { client }
    }

    /// Companies available for case-study comparisons.
    pub fn case_study_companies() -> &'static [CaseStudyCompany] {
        &CaseStudyCompany::ALL
    }

    /// Asks for 5-7 numbered follow-up questions about `idea`.
    ///
    /// The model output is split on newlines and kept verbatim.
    pub async fn follow_up_questions(
        &self,
        idea: &ProductIdea,
    ) -> Result<FollowUpQuestions, AnalysisFailure> {
        let request_id = RequestId::new();
        let prompt = follow_up_questions_prompt(idea.as_str());

        let text = self
            .client
            .complete(RequestMetadata::new(request_id, "follow_up_questions"), &prompt)
            .instrument(info_span!("follow_up_questions", request_id = %request_id))
            .await?;

        let questions = FollowUpQuestions::from_raw(&text);
        info!(
            request_id = %request_id,
            lines = questions.lines().len(),
            "Follow-up questions generated"
        );
        Ok(questions)
    }

    /// Runs a single framework.
    pub async fn analyze_framework(
        &self,
        request: &AnalysisRequest,
        framework: Framework,
    ) -> FrameworkResult {
        let prompt = framework_prompt(framework, &request.combined_input());
        let metadata = RequestMetadata::new(request.id(), format!("framework:{}", framework.key()));

        let outcome = self.client.complete(metadata, &prompt).await;
        FrameworkResult::new(framework, outcome)
    }

    /// Runs all four frameworks concurrently and waits for every one.
    pub async fn analyze_all_frameworks(&self, request: &AnalysisRequest) -> AnalysisBundle {
        let span = info_span!("analyze_frameworks", request_id = %request.id());

        async {
            let results = join_all(
                Framework::ALL
                    .into_iter()
                    .map(|framework| self.analyze_framework(request, framework)),
            )
            .await;

            let bundle = AnalysisBundle::from_results(results);
            info!(
                frameworks = Framework::ALL.len(),
                failures = bundle.failure_count(),
                "Framework analysis complete"
            );
            bundle
        }
        .instrument(span)
        .await
    }

    /// Compares the idea and its answers to `company`.
    pub async fn analyze_case_study(
        &self,
        request: &AnalysisRequest,
        company: CaseStudyCompany,
    ) -> CaseStudyResult {
        let prompt = case_study_prompt(
            request.product_idea().as_str(),
            company,
            &request.answers().to_prompt_json(),
        );
        let metadata = RequestMetadata::new(request.id(), format!("case_study:{}", company.name()));

        let outcome = self
            .client
            .complete(metadata, &prompt)
            .instrument(info_span!("case_study", request_id = %request.id(), company = %company))
            .await;

        info!(
            request_id = %request.id(),
            company = %company,
            success = outcome.is_ok(),
            "Case study complete"
        );
        CaseStudyResult::new(company, outcome)
    }

    /// Frameworks first, then the case study when a company is selected.
    pub async fn run_discovery(
        &self,
        request: &AnalysisRequest,
        case_study: Option<CaseStudyCompany>,
    ) -> AnalysisBundle {
        let mut bundle = self.analyze_all_frameworks(request).await;
        if let Some(company) = case_study {
            bundle.set_case_study(self.analyze_case_study(request, company).await);
        }
        bundle
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
