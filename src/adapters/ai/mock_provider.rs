//! Mock AI Provider for testing.
//!
//! Provides a configurable mock implementation of the AIProvider port,
//! allowing tests to run without calling real AI APIs.
//!
//! # Features
//!
//! - Pre-configured responses, consumed in order
//! - Prompt-matched responses for concurrent callers
//! - Simulated delays
//! - Error injection
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAIProvider::new()
//!     .with_response("1. What pain points do you see?")
//!     .with_error_when("4-Fit Model", MockError::Unavailable { message: "down".into() });
//!
//! let response = provider.complete(request).await?;
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, TokenUsage,
};

/// Content returned once the queue is empty and no rule matches.
pub const DEFAULT_MOCK_RESPONSE: &str = "Mock response";

/// Model name reported on mock completions.
pub const MOCK_MODEL: &str = "mock-model-1";

/// Mock AI provider for testing.
///
/// Configurable to return specific responses, simulate delays, or inject errors.
#[derive(Debug, Clone)]
pub struct MockAIProvider {
    /// Pre-configured responses (consumed in order).
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Responses chosen by a substring of the user prompt. Checked before the queue.
    rules: Arc<Mutex<Vec<(String, MockResponse)>>>,
    /// Simulated latency per request.
    delay: Duration,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a successful completion.
    Success {
        content: String,
        usage: TokenUsage,
        finish_reason: FinishReason,
    },
    /// Return an error.
    Error(MockError),
}

impl MockResponse {
    fn success(content: impl Into<String>) -> Self {
        MockResponse::Success {
            content: content.into(),
            usage: TokenUsage::new(10, 20),
            finish_reason: FinishReason::Stop,
        }
    }
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    /// Simulate rate limiting.
    RateLimited { retry_after_secs: u32 },
    /// Simulate content filtering.
    ContentFiltered { reason: String },
    /// Simulate provider unavailable.
    Unavailable { message: String },
    /// Simulate authentication failure.
    AuthenticationFailed,
    /// Simulate network error.
    Network { message: String },
    /// Simulate timeout.
    Timeout { timeout_secs: u32 },
}

impl From<MockError> for AIError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::RateLimited { retry_after_secs } => AIError::rate_limited(retry_after_secs),
            MockError::ContentFiltered { reason } => AIError::content_filtered(reason),
            MockError::Unavailable { message } => AIError::unavailable(message),
            MockError::AuthenticationFailed => AIError::AuthenticationFailed,
            MockError::Network { message } => AIError::network(message),
            MockError::Timeout { timeout_secs } => AIError::Timeout { timeout_secs },
        }
    }
}

impl Default for MockAIProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Locks a mutex, recovering the data if a panicking test poisoned it.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockAIProvider {
    /// Creates a new mock provider with default settings.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            rules: Arc::new(Mutex::new(Vec::new())),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a successful response to the queue.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        lock(&self.responses).push_back(MockResponse::success(content));
        self
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: MockError) -> Self {
        lock(&self.responses).push_back(MockResponse::Error(error));
        self
    }

    /// Answers every request whose user prompt contains `needle` with `content`.
    pub fn with_response_when(self, needle: impl Into<String>, content: impl Into<String>) -> Self {
        lock(&self.rules).push((needle.into(), MockResponse::success(content)));
        self
    }

    /// Fails every request whose user prompt contains `needle`.
    pub fn with_error_when(self, needle: impl Into<String>, error: MockError) -> Self {
        lock(&self.rules).push((needle.into(), MockResponse::Error(error)));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made to this provider.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        lock(&self.calls).clone()
    }

    /// Clears the call history.
    pub fn clear_calls(&self) {
        lock(&self.calls).clear();
    }

    /// Picks the response for a request: first matching rule, then the queue, then a default.
    fn next_response(&self, request: &CompletionRequest) -> MockResponse {
        let prompt = request.user_prompt().unwrap_or_default();

        let matched = lock(&self.rules)
            .iter()
            .find(|(needle, _)| prompt.contains(needle.as_str()))
            .map(|(_, response)| response.clone());

        matched
            .or_else(|| lock(&self.responses).pop_front())
            .unwrap_or_else(|| MockResponse::success(DEFAULT_MOCK_RESPONSE))
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let response = self.next_response(&request);

        // Record the call
        lock(&self.calls).push(request);

        // Simulate delay
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match response {
            MockResponse::Success {
                content,
                usage,
                finish_reason,
            } => Ok(CompletionResponse {
                content,
                usage,
                model: MOCK_MODEL.to_string(),
                finish_reason,
            }),
            MockResponse::Error(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::RequestId;
    use crate::ports::{MessageRole, RequestMetadata};

    fn test_request(prompt: &str) -> CompletionRequest {
        CompletionRequest::new(RequestMetadata::new(RequestId::new(), "test"))
            .with_message(MessageRole::User, prompt)
    }

    #[tokio::test]
    async fn mock_provider_returns_configured_response() {
        let provider = MockAIProvider::new().with_response("Hello from mock!");

        let response = provider.complete(test_request("Hello")).await.unwrap();

        assert_eq!(response.content, "Hello from mock!");
        assert_eq!(response.model, MOCK_MODEL);
        assert_eq!(response.finish_reason, FinishReason::Stop);
    }

    #[tokio::test]
    async fn mock_provider_returns_responses_in_order() {
        let provider = MockAIProvider::new()
            .with_response("First")
            .with_response("Second")
            .with_response("Third");

        let r1 = provider.complete(test_request("a")).await.unwrap();
        let r2 = provider.complete(test_request("b")).await.unwrap();
        let r3 = provider.complete(test_request("c")).await.unwrap();

        assert_eq!(r1.content, "First");
        assert_eq!(r2.content, "Second");
        assert_eq!(r3.content, "Third");
    }

    #[tokio::test]
    async fn mock_provider_returns_default_after_exhausted() {
        let provider = MockAIProvider::new().with_response("Only one");

        let r1 = provider.complete(test_request("a")).await.unwrap();
        let r2 = provider.complete(test_request("b")).await.unwrap();

        assert_eq!(r1.content, "Only one");
        assert_eq!(r2.content, DEFAULT_MOCK_RESPONSE);
    }

    #[tokio::test]
    async fn mock_provider_returns_configured_error() {
        let provider = MockAIProvider::new().with_error(MockError::RateLimited {
            retry_after_secs: 30,
        });

        let result = provider.complete(test_request("a")).await;

        assert!(matches!(
            result,
            Err(AIError::RateLimited {
                retry_after_secs: 30
            })
        ));
    }

    #[tokio::test]
    async fn rules_match_on_prompt_and_are_not_consumed() {
        let provider = MockAIProvider::new()
            .with_response("queued")
            .with_response_when("Jobs to Be Done", "jtbd answer")
            .with_error_when("4-Fit", MockError::AuthenticationFailed);

        let jtbd = provider.complete(test_request("Use Jobs to Be Done")).await.unwrap();
        let again = provider.complete(test_request("Jobs to Be Done again")).await.unwrap();
        let fit = provider.complete(test_request("Apply the 4-Fit model")).await;
        let other = provider.complete(test_request("something else")).await.unwrap();

        assert_eq!(jtbd.content, "jtbd answer");
        assert_eq!(again.content, "jtbd answer");
        assert!(matches!(fit, Err(AIError::AuthenticationFailed)));
        assert_eq!(other.content, "queued");
    }

    #[tokio::test]
    async fn mock_provider_tracks_calls() {
        let provider = MockAIProvider::new();

        assert_eq!(provider.call_count(), 0);

        provider.complete(test_request("one")).await.unwrap();
        provider.complete(test_request("two")).await.unwrap();

        assert_eq!(provider.call_count(), 2);
        assert_eq!(provider.get_calls()[1].user_prompt(), Some("two"));

        provider.clear_calls();
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn mock_provider_simulates_delay() {
        let provider = MockAIProvider::new().with_delay(Duration::from_millis(50));

        let start = std::time::Instant::now();
        provider.complete(test_request("a")).await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn mock_errors_convert_to_ai_errors() {
        let err: AIError = MockError::Timeout { timeout_secs: 5 }.into();
        assert!(matches!(err, AIError::Timeout { timeout_secs: 5 }));

        let err: AIError = MockError::Network {
            message: "reset".into(),
        }
        .into();
        assert_eq!(err.to_string(), "network error: reset");

        let err: AIError = MockError::ContentFiltered {
            reason: "blocked".into(),
        }
        .into();
        assert!(!err.is_retryable());
        assert_eq!(err.to_string(), "content filtered: blocked");
    }
}
