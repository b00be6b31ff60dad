//! Bounded tool-calling loop

use std::sync::Arc;

use crate::logging::Logger;
use crate::providers::{ChatRequest, Provider, ProviderModelConfig, ProviderResult};
use crate::tools::ToolRegistry;
use crate::types::{Conversation, ModelResponse, Tool, ToolCall, ToolResult};

use super::prompt::system_prompt;

/// Tool rounds allowed per query
pub const DEFAULT_MAX_ROUNDS: usize = 2;
pub const DEFAULT_TEMPERATURE: f32 = 0.0;
pub const DEFAULT_MAX_TOKENS: u32 = 800;

/// Drives one query through the model, dispatching tool requests between calls
///
/// The first call and every call after a round below `max_rounds` offer the
/// tools. The call after the last permitted round is tool-free, so the loop
/// issues at most `max_rounds + 1` model calls.
pub struct ResponseGenerator {
    provider: Arc<dyn Provider>,
    model: ProviderModelConfig,
    temperature: f32,
    max_tokens: u32,
    max_rounds: usize,
    logger: Arc<dyn Logger>,
}

impl ResponseGenerator {
    pub fn new(
        provider: Arc<dyn Provider>,
        model: ProviderModelConfig,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            provider,
            model,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            max_rounds: DEFAULT_MAX_ROUNDS,
            logger,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    fn request(&self, system: &str, conversation: &Conversation, tools: &[Tool]) -> ChatRequest {
        ChatRequest::new(system, conversation.messages().to_vec())
            .with_tools(tools)
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens)
    }

    /// Answer `query`, letting the model call tools for up to `max_rounds` rounds
    ///
    /// Tool failures are fed back to the model as result text. Model call
    /// failures end the query with an error.
    pub async fn generate_response(
        &self,
        query: &str,
        history: Option<&str>,
        tools: &[Tool],
        registry: Option<&ToolRegistry>,
    ) -> ProviderResult<String> {
        let system = system_prompt(history);
        let mut conversation = Conversation::new(query);

        let first_tools: &[Tool] = if self.max_rounds > 0 { tools } else { &[] };
        let mut response = self
            .provider
            .chat(self.request(&system, &conversation, first_tools), &self.model)
            .await?;

        let Some(registry) = registry else {
            return Ok(response.text_content());
        };

        let mut round = 0;
        while round < self.max_rounds && response.requests_tools() {
            let calls = response.tool_calls();
            if calls.is_empty() {
                self.logger.warn(
                    "[ResponseGenerator] tool_use response without tool calls, returning its text",
                );
                break;
            }
            round += 1;

            conversation = self.run_round(round, conversation, &response, &calls, registry).await;

            let round_tools: &[Tool] = if round < self.max_rounds { tools } else { &[] };
            self.logger.debug(&format!(
                "[ResponseGenerator] call {}: {} turn(s), tools={}",
                round + 1,
                conversation.len(),
                !round_tools.is_empty()
            ));
            response = self
                .provider
                .chat(self.request(&system, &conversation, round_tools), &self.model)
                .await?;
        }

        Ok(response.text_content())
    }

    /// Dispatch every call of one round in order and append the round
    async fn run_round(
        &self,
        round: usize,
        conversation: Conversation,
        response: &ModelResponse,
        calls: &[ToolCall],
        registry: &ToolRegistry,
    ) -> Conversation {
        self.logger.info(&format!(
            "[ResponseGenerator] round {}: dispatching {} tool call(s)",
            round,
            calls.len()
        ));

        let mut results = Vec::with_capacity(calls.len());
        for call in calls {
            let result = match registry.dispatch(&call.name, &call.input).await {
                Ok(content) => ToolResult::success(&call.id, content),
                Err(e) => {
                    crate::log_warn!(self.logger, "[ResponseGenerator] tool {} failed: {}", call.name, e);
                    ToolResult::error(&call.id, format!("Error executing tool: {}", e))
                }
            };
            results.push(result);
        }

        conversation.with_round(response, results)
    }
}

impl std::fmt::Debug for ResponseGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseGenerator")
            .field("provider", &self.provider.name())
            .field("model", &self.model.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("max_rounds", &self.max_rounds)
            .finish()
    }
}
