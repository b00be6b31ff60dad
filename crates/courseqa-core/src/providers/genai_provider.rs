//! GenaiProvider - model transport built on the genai crate

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use genai::chat::ChatRequest as GenaiRequest;

use crate::logging::Logger;
use crate::secrets::{EnvSecretStore, SecretStore};
use crate::types::ModelResponse;

use super::error::{ProviderError, ProviderResult};
use super::genai_adapter::{
    create_client, from_genai_response, to_genai_messages, to_genai_options, to_genai_tools,
};
use super::traits::{ChatRequest, Provider, ProviderModelConfig};

/// Provider for every API genai supports (Anthropic, OpenAI, Gemini, Ollama, ...)
pub struct GenaiProvider {
    /// Provider identifier, also the secret store key for its API key
    provider_id: String,
    /// Where API keys come from when the model config has none
    secrets: Arc<dyn SecretStore>,
    /// Optional per-request timeout
    timeout: Option<Duration>,
    logger: Arc<dyn Logger>,
}

impl GenaiProvider {
    /// Create a provider reading API keys from the environment
    pub fn new(provider_id: impl Into<String>, logger: Arc<dyn Logger>) -> Self {
        Self {
            provider_id: provider_id.into(),
            secrets: Arc::new(EnvSecretStore::new()),
            timeout: None,
            logger,
        }
    }

    /// Use a different secret store
    pub fn with_secrets(mut self, secrets: Arc<dyn SecretStore>) -> Self {
        self.secrets = secrets;
        self
    }

    /// Fail requests that take longer than `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Extract model name from a model string (e.g., "anthropic/claude-3" -> "claude-3")
    pub fn extract_model_name(model: &str) -> &str {
        model.split('/').nth(1).unwrap_or(model)
    }

    fn check_credentials(&self, model: &ProviderModelConfig) -> ProviderResult<()> {
        // Local servers don't need a key
        if self.provider_id == "ollama" || model.api_key.is_some() {
            return Ok(());
        }
        if self.secrets.has(&self.provider_id) {
            Ok(())
        } else {
            Err(ProviderError::missing_api_key(&self.provider_id))
        }
    }
}

#[async_trait]
impl Provider for GenaiProvider {
    fn name(&self) -> &str {
        &self.provider_id
    }

    async fn chat(
        &self,
        request: ChatRequest,
        model: &ProviderModelConfig,
    ) -> ProviderResult<ModelResponse> {
        self.check_credentials(model)?;

        let model_name = Self::extract_model_name(&model.model);
        self.logger.debug(&format!(
            "[GenaiProvider] chat: provider={}, model={}, messages={}, tools={}",
            self.provider_id,
            model_name,
            request.messages.len(),
            request.tools.as_ref().map_or(0, Vec::len),
        ));

        let client = create_client(&self.provider_id, model, Arc::clone(&self.secrets));
        let options = to_genai_options(&request);

        let mut chat_req = GenaiRequest::new(to_genai_messages(&request.system, request.messages));
        if let Some(tools) = request.tools {
            chat_req = chat_req.with_tools(to_genai_tools(tools));
        }

        let call = client.exec_chat(model_name, chat_req, Some(&options));
        let result = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, call).await.map_err(|_| {
                self.logger.error(&format!(
                    "[GenaiProvider] request timed out after {}s",
                    timeout.as_secs()
                ));
                ProviderError::Timeout {
                    provider: self.provider_id.clone(),
                    seconds: timeout.as_secs(),
                }
            })?,
            None => call.await,
        };

        let response = result.map_err(|e| {
            self.logger.error(&format!("[GenaiProvider] API error: {}", e));
            ProviderError::api_error(&self.provider_id, 500, e.to_string())
        })?;

        let response = from_genai_response(&response);
        self.logger.debug(&format!(
            "[GenaiProvider] response: stop_reason={:?}, blocks={}",
            response.stop_reason,
            response.content.len()
        ));
        Ok(response)
    }
}

impl std::fmt::Debug for GenaiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenaiProvider")
            .field("provider_id", &self.provider_id)
            .field("secrets", &self.secrets.name())
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::NoOpLogger;
    use crate::secrets::MemorySecretStore;
    use crate::types::ChatMessage;

    #[test]
    fn test_extract_model_name() {
        assert_eq!(
            GenaiProvider::extract_model_name("anthropic/claude-sonnet-4-20250514"),
            "claude-sonnet-4-20250514"
        );
        assert_eq!(GenaiProvider::extract_model_name("gpt-4o"), "gpt-4o");
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_any_request() {
        let provider = GenaiProvider::new("anthropic", Arc::new(NoOpLogger))
            .with_secrets(Arc::new(MemorySecretStore::new()));
        let request = ChatRequest::new("sys", vec![ChatMessage::user("hi")]);

        let err = provider
            .chat(request, &ProviderModelConfig::new("claude-sonnet-4-20250514"))
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::MissingApiKey { .. }));
    }

    #[test]
    fn test_credentials_from_secret_store() {
        let secrets = MemorySecretStore::new();
        secrets.store("anthropic", "sk-test").unwrap();
        let provider = GenaiProvider::new("anthropic", Arc::new(NoOpLogger))
            .with_secrets(Arc::new(secrets));

        assert!(provider
            .check_credentials(&ProviderModelConfig::new("claude-sonnet-4-20250514"))
            .is_ok());
    }

    #[test]
    fn test_debug_impl() {
        let provider = GenaiProvider::new("anthropic", Arc::new(NoOpLogger))
            .with_timeout(Duration::from_secs(30));
        let debug = format!("{:?}", provider);
        assert!(debug.contains("anthropic"));
        assert!(debug.contains("env"));
    }
}
