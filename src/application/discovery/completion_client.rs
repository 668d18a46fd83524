//! CompletionClient - Single-shot completions with the product strategist persona.
//!
//! Wraps an `AIProvider` so every call carries the fixed system prompt and a
//! token limit, and so provider errors come back as `AnalysisFailure` values
//! that reports can show in place of the missing analysis.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::discovery::prompts::SYSTEM_PROMPT;
use crate::domain::discovery::AnalysisFailure;
use crate::ports::{AIError, AIProvider, CompletionRequest, MessageRole, RequestMetadata};

/// Token limit applied when none is configured.
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

impl From<AIError> for AnalysisFailure {
    fn from(err: AIError) -> Self {
        AnalysisFailure::new(err.to_string())
    }
}

/// Sends one system + user prompt pair per call. Never retries on its own.
#[derive(Clone)]
pub struct CompletionClient {
    provider: Arc<dyn AIProvider>,
    system_prompt: String,
    max_tokens: u32,
    temperature: Option<f32>,
}

impl CompletionClient {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self {
            provider,
            system_prompt: SYSTEM_PROMPT.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: None,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    /// Completes `user_prompt` with the configured token limit.
    pub async fn complete(
        &self,
        metadata: RequestMetadata,
        user_prompt: &str,
    ) -> Result<String, AnalysisFailure> {
        self.complete_with_limit(metadata, user_prompt, self.max_tokens)
            .await
    }

    /// Completes `user_prompt`, generating at most `max_tokens` tokens.
    pub async fn complete_with_limit(
        &self,
        metadata: RequestMetadata,
        user_prompt: &str,
        max_tokens: u32,
    ) -> Result<String, AnalysisFailure> {
        let purpose = metadata.purpose.clone();
        let mut request = CompletionRequest::new(metadata)
            .with_system_prompt(self.system_prompt.as_str())
            .with_message(MessageRole::User, user_prompt)
            .with_max_tokens(max_tokens);
        if let Some(temperature) = self.temperature {
            request = request.with_temperature(temperature);
        }

        debug!(
            purpose = %purpose,
            prompt_len = user_prompt.len(),
            max_tokens,
            "Dispatching completion"
        );

        match self.provider.complete(request).await {
            Ok(response) => {
                debug!(
                    purpose = %purpose,
                    total_tokens = response.usage.total_tokens,
                    "Completion received"
                );
                Ok(response.content)
            }
            Err(err) => {
                warn!(purpose = %purpose, error = %err, "Completion failed");
                Err(err.into())
            }
        }
    }

    /// Like [`CompletionClient::complete`] but renders a failure as
    /// `Error in analysis: <details>` in place of the text.
    pub async fn complete_text(&self, metadata: RequestMetadata, user_prompt: &str) -> String {
        match self.complete(metadata, user_prompt).await {
            Ok(text) => text,
            Err(failure) => failure.to_string(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::domain::foundation::RequestId;

    fn metadata() -> RequestMetadata {
        RequestMetadata::new(RequestId::new(), "test")
    }

    #[tokio::test]
    async fn sends_system_prompt_user_prompt_and_limit() {
        let mock = Arc::new(MockAIProvider::new().with_response("analysis"));
        let client = CompletionClient::new(mock.clone());

        let text = client.complete(metadata(), "Analyze this").await.unwrap();

        assert_eq!(text, "analysis");
        let calls = mock.get_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].system_prompt.as_deref(), Some(SYSTEM_PROMPT));
        assert_eq!(calls[0].user_prompt(), Some("Analyze this"));
        assert_eq!(calls[0].max_tokens, Some(DEFAULT_MAX_TOKENS));
        assert_eq!(calls[0].temperature, None);
    }

    #[tokio::test]
    async fn configured_limit_and_temperature_are_sent() {
        let mock = Arc::new(MockAIProvider::new());
        let client = CompletionClient::new(mock.clone())
            .with_max_tokens(250)
            .with_temperature(0.2);

        client.complete(metadata(), "x").await.unwrap();
        client.complete_with_limit(metadata(), "y", 50).await.unwrap();

        let calls = mock.get_calls();
        assert_eq!(calls[0].max_tokens, Some(250));
        assert_eq!(calls[0].temperature, Some(0.2));
        assert_eq!(calls[1].max_tokens, Some(50));
    }

    #[tokio::test]
    async fn provider_error_becomes_analysis_failure() {
        let mock = Arc::new(MockAIProvider::new().with_error(MockError::AuthenticationFailed));
        let client = CompletionClient::new(mock.clone());

        let failure = client.complete(metadata(), "x").await.unwrap_err();

        assert_eq!(failure.details(), "authentication failed");
        assert_eq!(failure.to_string(), "Error in analysis: authentication failed");
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn complete_text_renders_failure_in_band() {
        let mock = Arc::new(
            MockAIProvider::new()
                .with_response("fine")
                .with_error(MockError::Unavailable {
                    message: "Server error 503".into(),
                }),
        );
        let client = CompletionClient::new(mock);

        assert_eq!(client.complete_text(metadata(), "a").await, "fine");
        assert_eq!(
            client.complete_text(metadata(), "b").await,
            "Error in analysis: provider unavailable: Server error 503"
        );
    }
}
