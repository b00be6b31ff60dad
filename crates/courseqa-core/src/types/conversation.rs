//! Append-only conversation log used by the tool loop

use super::message::{ChatMessage, MessageRole};
use super::response::ModelResponse;
use super::tool::ToolResult;

/// Ordered conversation turns for one query
///
/// Turns are only ever appended. A tool round is appended as a unit: the
/// assistant turn that requested the tools followed by the user turn holding
/// one result per request, in request order.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    turns: Vec<ChatMessage>,
}

impl Conversation {
    /// Start a conversation with the user's query
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            turns: vec![ChatMessage::user(query)],
        }
    }

    /// Append one tool round and return the extended log
    ///
    /// `results` must answer the tool calls of `response` one-to-one and in
    /// the same order.
    pub fn with_round(mut self, response: &ModelResponse, results: Vec<ToolResult>) -> Self {
        debug_assert!(
            response
                .tool_calls()
                .iter()
                .map(|c| c.id.as_str())
                .eq(results.iter().map(|r| r.call_id.as_str())),
            "tool results must match tool calls position by position"
        );

        self.turns.push(response.to_message());
        self.turns.push(ChatMessage::tool_results(&results));
        self
    }

    /// Turns in order
    pub fn messages(&self) -> &[ChatMessage] {
        &self.turns
    }

    /// Number of turns
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Number of completed tool rounds
    pub fn rounds(&self) -> usize {
        self.turns
            .iter()
            .filter(|t| t.role == MessageRole::Assistant)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ToolCall;
    use serde_json::json;

    #[test]
    fn test_new_conversation() {
        let conversation = Conversation::new("What is RAG?");
        assert_eq!(conversation.len(), 1);
        assert_eq!(conversation.rounds(), 0);
        assert_eq!(conversation.messages()[0].text(), Some("What is RAG?"));
    }

    #[test]
    fn test_round_appends_request_then_results() {
        let response = ModelResponse::tool_use(vec![
            ToolCall::new("a", "search_course_content", json!({"query": "x"})),
            ToolCall::new("b", "get_course_outline", json!({"course_name": "y"})),
        ]);
        let results = vec![
            ToolResult::success("a", "first"),
            ToolResult::success("b", "second"),
        ];

        let conversation = Conversation::new("q").with_round(&response, results);

        assert_eq!(conversation.len(), 3);
        assert_eq!(conversation.rounds(), 1);
        let turns = conversation.messages();
        assert_eq!(turns[1].role, MessageRole::Assistant);
        assert_eq!(turns[2].role, MessageRole::User);
        assert_eq!(turns[2].tool_result_ids(), vec!["a", "b"]);
    }
}
