//! Provider trait definition

use async_trait::async_trait;

use crate::types::{ChatMessage, ModelResponse, Tool, ToolChoice};
use super::error::ProviderResult;

/// Model configuration for provider requests
#[derive(Debug, Clone)]
pub struct ProviderModelConfig {
    /// Model identifier as used by the provider's API
    pub model: String,
    /// API key for authentication
    pub api_key: Option<String>,
    /// Custom API base URL
    pub api_base: Option<String>,
}

impl ProviderModelConfig {
    /// Create a new model config
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            api_key: None,
            api_base: None,
        }
    }

    /// Set the API key
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the API base URL
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = Some(base.into());
        self
    }
}

/// One model call
///
/// A request without `tools` is tool-free: the provider must not answer it
/// with a tool request.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    /// System instructions
    pub system: String,
    /// Conversation turns, oldest first
    pub messages: Vec<ChatMessage>,
    /// Tools available for the model to use
    pub tools: Option<Vec<Tool>>,
    /// Tool choice behavior
    pub tool_choice: Option<ToolChoice>,
    /// Temperature for response generation
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Create a tool-free request
    pub fn new(system: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            system: system.into(),
            messages,
            tools: None,
            tool_choice: None,
            temperature: None,
            max_tokens: None,
        }
    }

    /// Offer tools with automatic tool choice; an empty list offers nothing
    pub fn with_tools(mut self, tools: &[Tool]) -> Self {
        if !tools.is_empty() {
            self.tools = Some(tools.to_vec());
            self.tool_choice = Some(ToolChoice::Auto);
        }
        self
    }

    /// Set temperature
    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    /// Set max tokens
    pub fn with_max_tokens(mut self, tokens: u32) -> Self {
        self.max_tokens = Some(tokens);
        self
    }

    /// Whether any tools are offered
    pub fn has_tools(&self) -> bool {
        self.tools.as_ref().is_some_and(|t| !t.is_empty())
    }
}

/// Provider trait for model transports
#[async_trait]
pub trait Provider: Send + Sync {
    /// Get the provider name (e.g., "anthropic", "mock")
    fn name(&self) -> &str;

    /// Run one complete (non-streamed) chat call
    async fn chat(
        &self,
        request: ChatRequest,
        model: &ProviderModelConfig,
    ) -> ProviderResult<ModelResponse>;
}
