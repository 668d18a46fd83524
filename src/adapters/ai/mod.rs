//! AI provider adapters.
//!
//! - `OpenRouterProvider` - OpenRouter chat completions over HTTP
//! - `MockAIProvider` - Scripted provider for tests and offline runs

mod mock_provider;
mod openrouter_provider;

pub use mock_provider::{
    MockAIProvider, MockError, MockResponse, DEFAULT_MOCK_RESPONSE, MOCK_MODEL,
};
pub use openrouter_provider::{
    OpenRouterConfig, OpenRouterProvider, DEFAULT_BASE_URL, DEFAULT_MODEL,
};
