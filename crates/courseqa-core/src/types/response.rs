//! Model response types

use serde::{Deserialize, Serialize};

use super::message::{ChatMessage, ContentPart, MessageRole};
use super::tool::ToolCall;

/// Why the model stopped generating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Natural end of the answer
    EndTurn,
    /// The model is asking for one or more tools to run
    ToolUse,
    /// Output was cut off by the token limit
    MaxTokens,
    /// A configured stop sequence was hit
    StopSequence,
}

impl StopReason {
    /// Whether this stop reason asks the caller to run tools
    pub fn is_tool_use(self) -> bool {
        matches!(self, StopReason::ToolUse)
    }
}

/// One complete (non-streamed) response from the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResponse {
    /// Why generation ended
    pub stop_reason: StopReason,
    /// Content blocks in emitted order
    pub content: Vec<ContentPart>,
}

impl ModelResponse {
    pub fn new(stop_reason: StopReason, content: Vec<ContentPart>) -> Self {
        Self { stop_reason, content }
    }

    /// A terminal text answer
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(StopReason::EndTurn, vec![ContentPart::text(text)])
    }

    /// A response requesting the given tool calls
    pub fn tool_use(calls: Vec<ToolCall>) -> Self {
        let content = calls.iter().map(ContentPart::from).collect();
        Self::new(StopReason::ToolUse, content)
    }

    /// Whether the stop reason asks for tools
    pub fn requests_tools(&self) -> bool {
        self.stop_reason.is_tool_use()
    }

    /// Concatenated text blocks (empty when there are none)
    pub fn text_content(&self) -> String {
        self.content.iter().filter_map(ContentPart::as_text).collect()
    }

    /// Tool calls in emitted order
    pub fn tool_calls(&self) -> Vec<ToolCall> {
        self.content.iter().filter_map(ContentPart::as_tool_call).collect()
    }

    /// The assistant turn exactly as emitted
    pub fn to_message(&self) -> ChatMessage {
        ChatMessage::with_parts(MessageRole::Assistant, self.content.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_response() {
        let response = ModelResponse::text("ML is...");
        assert!(!response.requests_tools());
        assert_eq!(response.text_content(), "ML is...");
        assert!(response.tool_calls().is_empty());
    }

    #[test]
    fn test_tool_use_response() {
        let response = ModelResponse::tool_use(vec![ToolCall::new(
            "t1",
            "search_course_content",
            json!({"query": "vectors"}),
        )]);
        assert!(response.requests_tools());
        assert_eq!(response.text_content(), "");
        assert_eq!(response.tool_calls()[0].id, "t1");
        assert_eq!(response.to_message().role, MessageRole::Assistant);
    }

    #[test]
    fn test_text_content_joins_blocks() {
        let response = ModelResponse::new(
            StopReason::ToolUse,
            vec![
                ContentPart::text("Checking "),
                ContentPart::tool_use("t1", "get_course_outline", json!({})),
                ContentPart::text("the outline."),
            ],
        );
        assert_eq!(response.text_content(), "Checking the outline.");
    }

    #[test]
    fn test_stop_reason_serialization() {
        let json = serde_json::to_string(&StopReason::ToolUse).unwrap();
        assert_eq!(json, "\"tool_use\"");
    }
}
