//! Adapter between courseqa-core types and genai types
//!
//! Auth flows through our `SecretStore`, not genai's env var lookup, so API
//! keys resolve the same way in tests and in production.

use std::sync::Arc;

use genai::chat::{
    ChatMessage as GenaiMessage, ChatOptions as GenaiOptions, ChatResponse as GenaiResponse,
    ChatRole as GenaiRole, ContentPart as GenaiPart, MessageContent as GenaiContent,
    Tool as GenaiTool, ToolCall as GenaiToolCall, ToolResponse as GenaiToolResponse,
};
use genai::resolver::{AuthData, AuthResolver, Endpoint, ServiceTargetResolver};
use genai::{Client, ModelIden, ServiceTarget};

use crate::secrets::SecretStore;
use crate::types::{
    ChatMessage, ContentPart, MessageContent, MessageRole, ModelResponse, StopReason, Tool,
    ToolCall,
};

use super::traits::{ChatRequest, ProviderModelConfig};

// ============================================================================
// Message Conversion: courseqa -> genai
// ============================================================================

/// Convert a MessageRole to genai ChatRole
pub fn to_genai_role(role: MessageRole) -> GenaiRole {
    match role {
        MessageRole::User => GenaiRole::User,
        MessageRole::Assistant => GenaiRole::Assistant,
    }
}

fn to_genai_tool_call(call: ToolCall) -> GenaiToolCall {
    GenaiToolCall {
        call_id: call.id,
        fn_name: call.name,
        fn_arguments: call.input,
    }
}

/// Convert one conversation turn to genai messages
///
/// A turn can expand to several genai messages: every tool result becomes
/// its own tool-response message, in order.
pub fn to_genai_messages_for(msg: ChatMessage) -> Vec<GenaiMessage> {
    let parts = match msg.content {
        MessageContent::Text(text) => {
            return vec![match msg.role {
                MessageRole::User => GenaiMessage::user(text),
                MessageRole::Assistant => GenaiMessage::assistant(text),
            }];
        }
        MessageContent::Parts(parts) => parts,
    };

    match msg.role {
        // text and tool calls travel together, in the order the model emitted them
        MessageRole::Assistant => {
            let parts: Vec<GenaiPart> = parts
                .into_iter()
                .filter_map(|part| match part {
                    ContentPart::Text { text } => Some(GenaiPart::Text(text)),
                    ContentPart::ToolUse { id, name, input } => {
                        Some(GenaiPart::ToolCall(to_genai_tool_call(ToolCall::new(id, name, input))))
                    }
                    ContentPart::ToolResult { .. } => None,
                })
                .collect();
            vec![GenaiMessage::assistant(GenaiContent::from_parts(parts))]
        }
        MessageRole::User => {
            let mut text = String::new();
            let mut responses = Vec::new();
            for part in parts {
                match part {
                    ContentPart::Text { text: t } => text.push_str(&t),
                    ContentPart::ToolResult { tool_use_id, content, .. } => {
                        responses.push(GenaiToolResponse::new(tool_use_id, content));
                    }
                    ContentPart::ToolUse { .. } => {}
                }
            }

            let mut out = Vec::new();
            if !text.is_empty() {
                out.push(GenaiMessage::user(text));
            }
            out.extend(responses.into_iter().map(GenaiMessage::from));
            out
        }
    }
}

/// Convert a system prompt plus turns to genai messages
pub fn to_genai_messages(system: &str, messages: Vec<ChatMessage>) -> Vec<GenaiMessage> {
    let mut out = vec![GenaiMessage::system(system)];
    out.extend(messages.into_iter().flat_map(to_genai_messages_for));
    out
}

// ============================================================================
// Tool Conversion: courseqa -> genai
// ============================================================================

/// Convert a Tool to genai Tool
pub fn to_genai_tool(tool: Tool) -> GenaiTool {
    let mut genai_tool = GenaiTool::new(&tool.name).with_description(&tool.description);

    if let Some(schema) = tool.input_schema {
        genai_tool = genai_tool.with_schema(schema);
    }

    genai_tool
}

/// Convert tools to genai tools
pub fn to_genai_tools(tools: Vec<Tool>) -> Vec<GenaiTool> {
    tools.into_iter().map(to_genai_tool).collect()
}

// ============================================================================
// Options Conversion: courseqa -> genai
// ============================================================================

/// Build genai ChatOptions from a request
pub fn to_genai_options(request: &ChatRequest) -> GenaiOptions {
    let mut genai_opts = GenaiOptions::default();

    if let Some(temp) = request.temperature {
        genai_opts = genai_opts.with_temperature(temp as f64);
    }

    if let Some(max_tokens) = request.max_tokens {
        genai_opts = genai_opts.with_max_tokens(max_tokens);
    }

    genai_opts
}

// ============================================================================
// Response Conversion: genai -> courseqa
// ============================================================================

/// Convert a genai ToolCall to our ToolCall
pub fn from_genai_tool_call(tc: &GenaiToolCall) -> ToolCall {
    ToolCall::new(tc.call_id.clone(), tc.fn_name.clone(), tc.fn_arguments.clone())
}

/// Convert a genai chat response into a model response
pub fn from_genai_response(response: &GenaiResponse) -> ModelResponse {
    from_genai_content(&response.content)
}

/// Convert genai message content into a model response, keeping part order
///
/// genai does not surface the stop reason, so it is derived from the content:
/// any tool call means `ToolUse`.
pub fn from_genai_content(content: &GenaiContent) -> ModelResponse {
    let mut parts = Vec::new();
    let mut has_calls = false;

    for part in content.parts() {
        match part {
            GenaiPart::Text(text) if !text.is_empty() => parts.push(ContentPart::text(text.as_str())),
            GenaiPart::ToolCall(tc) => {
                has_calls = true;
                parts.push(ContentPart::from(&from_genai_tool_call(tc)));
            }
            _ => {}
        }
    }

    let stop_reason = if has_calls {
        StopReason::ToolUse
    } else {
        StopReason::EndTurn
    };
    ModelResponse::new(stop_reason, parts)
}

// ============================================================================
// Client Creation with Custom Auth
// ============================================================================

/// Create a genai Client with our auth and endpoint resolution
///
/// The explicit key on the model config wins; otherwise the secret store is
/// asked for the provider's key.
pub fn create_client(
    provider: &str,
    model: &ProviderModelConfig,
    secrets: Arc<dyn SecretStore>,
) -> Client {
    let auth_provider = provider.to_string();
    let explicit_key = model.api_key.clone();

    let auth_resolver = AuthResolver::from_resolver_fn(
        move |_model_iden: ModelIden| -> Result<Option<AuthData>, genai::resolver::Error> {
            if let Some(key) = explicit_key.clone() {
                return Ok(Some(AuthData::from_single(key)));
            }
            Ok(secrets.get(&auth_provider).map(AuthData::from_single))
        },
    );

    let mut builder = Client::builder().with_auth_resolver(auth_resolver);

    if let Some(api_base) = model.api_base.clone() {
        let target_resolver = ServiceTargetResolver::from_resolver_fn(
            move |target: ServiceTarget| -> Result<ServiceTarget, genai::resolver::Error> {
                let ServiceTarget { auth, model, .. } = target;
                Ok(ServiceTarget {
                    endpoint: Endpoint::from_owned(api_base.clone()),
                    auth,
                    model,
                })
            },
        );
        builder = builder.with_service_target_resolver(target_resolver);
    }

    builder.build()
}
