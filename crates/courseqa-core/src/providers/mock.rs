//! Mock provider for testing
//!
//! Provides deterministic, scripted responses without network dependencies
//! and records every request so tests can inspect what the tool loop sent.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

use super::error::{ProviderError, ProviderResult};
use super::traits::{ChatRequest, Provider, ProviderModelConfig};
use crate::logging::Logger;
use crate::types::{ChatMessage, ContentPart, MessageContent, MessageRole, ModelResponse};

/// Mock response mode
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Echo back the last user text
    Echo,
    /// Return the same text answer for every call
    Fixed(String),
    /// Return the scripted responses in order, one per call
    Script(Vec<ModelResponse>),
    /// Fail every call
    Error(String),
}

impl Default for MockMode {
    fn default() -> Self {
        MockMode::Echo
    }
}

/// Mock model provider for testing
pub struct MockProvider {
    mode: MockMode,
    script: Mutex<VecDeque<ModelResponse>>,
    requests: Mutex<Vec<ChatRequest>>,
    logger: Arc<dyn Logger>,
}

impl MockProvider {
    /// Create a mock provider in the given mode
    pub fn with_mode(mode: MockMode, logger: Arc<dyn Logger>) -> Self {
        let script = match &mode {
            MockMode::Script(responses) => responses.iter().cloned().collect(),
            _ => VecDeque::new(),
        };
        Self {
            mode,
            script: Mutex::new(script),
            requests: Mutex::new(Vec::new()),
            logger,
        }
    }

    /// Create an echo provider (echoes back the last user text)
    pub fn echo(logger: Arc<dyn Logger>) -> Self {
        Self::with_mode(MockMode::Echo, logger)
    }

    /// Create a fixed response provider
    pub fn fixed(response: impl Into<String>, logger: Arc<dyn Logger>) -> Self {
        Self::with_mode(MockMode::Fixed(response.into()), logger)
    }

    /// Create a provider that plays back `responses` in order
    pub fn scripted(responses: Vec<ModelResponse>, logger: Arc<dyn Logger>) -> Self {
        Self::with_mode(MockMode::Script(responses), logger)
    }

    /// Create an error-producing provider
    pub fn error(message: impl Into<String>, logger: Arc<dyn Logger>) -> Self {
        Self::with_mode(MockMode::Error(message.into()), logger)
    }

    /// Every request received so far, in call order
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().clone()
    }

    /// Number of calls received so far
    pub fn call_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Extract last user text
    fn last_user_text(messages: &[ChatMessage]) -> String {
        for msg in messages.iter().rev() {
            if msg.role != MessageRole::User {
                continue;
            }
            let text = match &msg.content {
                MessageContent::Text(text) => text.clone(),
                MessageContent::Parts(parts) => parts
                    .iter()
                    .filter_map(|p| match p {
                        ContentPart::Text { text } => Some(text.as_str()),
                        ContentPart::ToolResult { content, .. } => Some(content.as_str()),
                        ContentPart::ToolUse { .. } => None,
                    })
                    .collect(),
            };
            if !text.is_empty() {
                return text;
            }
        }
        "Hello from MockProvider!".to_string()
    }
}

#[async_trait]
impl Provider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn chat(
        &self,
        request: ChatRequest,
        _model: &ProviderModelConfig,
    ) -> ProviderResult<ModelResponse> {
        self.logger.debug(&format!(
            "MockProvider: chat called with {} message(s), tools={}",
            request.messages.len(),
            request.has_tools()
        ));

        let response = match &self.mode {
            MockMode::Echo => Ok(ModelResponse::text(format!(
                "Echo: {}",
                Self::last_user_text(&request.messages)
            ))),
            MockMode::Fixed(text) => Ok(ModelResponse::text(text.clone())),
            MockMode::Script(_) => self.script.lock().pop_front().ok_or_else(|| {
                ProviderError::Other("Mock error: script exhausted".to_string())
            }),
            MockMode::Error(message) => Err(ProviderError::Other(format!("Mock error: {}", message))),
        };

        self.requests.lock().push(request);
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::NoOpLogger;
    use crate::types::{StopReason, ToolCall};
    use serde_json::json;

    fn test_logger() -> Arc<dyn Logger> {
        Arc::new(NoOpLogger::new())
    }

    fn test_request(content: &str) -> ChatRequest {
        ChatRequest::new("system", vec![ChatMessage::user(content)])
    }

    fn test_config() -> ProviderModelConfig {
        ProviderModelConfig::new("mock-model")
    }

    #[tokio::test]
    async fn test_echo_mode() {
        let provider = MockProvider::echo(test_logger());
        let response = provider
            .chat(test_request("Hello, world!"), &test_config())
            .await
            .expect("chat should succeed");

        assert_eq!(response.text_content(), "Echo: Hello, world!");
        assert_eq!(response.stop_reason, StopReason::EndTurn);
    }

    #[tokio::test]
    async fn test_fixed_mode() {
        let provider = MockProvider::fixed("This is a test response.", test_logger());
        let response = provider.chat(test_request("Anything"), &test_config()).await.unwrap();
        assert_eq!(response.text_content(), "This is a test response.");
    }

    #[tokio::test]
    async fn test_script_plays_in_order_then_runs_out() {
        let provider = MockProvider::scripted(
            vec![
                ModelResponse::tool_use(vec![ToolCall::new("t1", "get_course_outline", json!({}))]),
                ModelResponse::text("done"),
            ],
            test_logger(),
        );

        let first = provider.chat(test_request("q"), &test_config()).await.unwrap();
        assert!(first.requests_tools());
        let second = provider.chat(test_request("q"), &test_config()).await.unwrap();
        assert_eq!(second.text_content(), "done");
        assert!(provider.chat(test_request("q"), &test_config()).await.is_err());
        assert_eq!(provider.call_count(), 3);
    }

    #[tokio::test]
    async fn test_error_mode() {
        let provider = MockProvider::error("Test error message", test_logger());
        let err = provider.chat(test_request("Anything"), &test_config()).await.unwrap_err();
        assert!(err.to_string().contains("Test error message"));
    }

    #[tokio::test]
    async fn test_requests_are_recorded() {
        let provider = MockProvider::fixed("ok", test_logger());
        provider.chat(test_request("first"), &test_config()).await.unwrap();
        provider.chat(test_request("second"), &test_config()).await.unwrap();

        let requests = provider.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].messages[0].text(), Some("second"));
    }

    #[test]
    fn test_provider_name() {
        assert_eq!(MockProvider::echo(test_logger()).name(), "mock");
    }
}
