//! Tool/function calling types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tool schema entry sent to the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    /// Tool name (function name)
    pub name: String,
    /// Description of what the tool does
    pub description: String,
    /// JSON Schema for the input parameters
    #[serde(rename = "input_schema", skip_serializing_if = "Option::is_none")]
    pub input_schema: Option<Value>,
}

impl Tool {
    /// Create a new tool definition
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema: None,
        }
    }

    /// Set the input schema
    pub fn with_schema(mut self, schema: Value) -> Self {
        self.input_schema = Some(schema);
        self
    }

    /// Names listed as required by the input schema
    pub fn required_params(&self) -> Vec<&str> {
        self.input_schema
            .as_ref()
            .and_then(|s| s.get("required"))
            .and_then(|r| r.as_array())
            .map(|r| r.iter().filter_map(|v| v.as_str()).collect())
            .unwrap_or_default()
    }
}

/// Tool invocation request emitted by the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Unique identifier for this tool call
    pub id: String,
    /// Name of the tool being called
    pub name: String,
    /// Input arguments for the tool
    pub input: Value,
}

impl ToolCall {
    /// Create a new tool call
    pub fn new(id: impl Into<String>, name: impl Into<String>, input: Value) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            input,
        }
    }

    /// Get an input argument as a string
    pub fn get_arg_str(&self, key: &str) -> Option<&str> {
        self.input.get(key).and_then(|v| v.as_str())
    }

    /// Get an input argument as an i64
    pub fn get_arg_i64(&self, key: &str) -> Option<i64> {
        self.input.get(key).and_then(|v| v.as_i64())
    }
}

/// Tool result to send back to the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    /// ID of the tool call this is responding to
    #[serde(rename = "tool_use_id")]
    pub call_id: String,
    /// The result content
    pub content: String,
    /// Whether this result represents an error
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl ToolResult {
    /// Create a successful tool result
    pub fn success(call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            call_id: call_id.into(),
            content: content.into(),
            is_error: false,
        }
    }

    /// Create an error tool result
    pub fn error(call_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            call_id: call_id.into(),
            content: error.into(),
            is_error: true,
        }
    }
}

/// Tool choice option for requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolChoice {
    /// Let the model decide whether to use tools
    #[default]
    Auto,
    /// Force the model to use some tool
    Any,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_creation() {
        let tool = Tool::new("get_course_outline", "Get a course outline")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "course_name": { "type": "string" }
                },
                "required": ["course_name"]
            }));

        assert_eq!(tool.name, "get_course_outline");
        assert_eq!(tool.required_params(), vec!["course_name"]);
    }

    #[test]
    fn test_tool_call_args() {
        let call = ToolCall::new(
            "toolu_1",
            "search_course_content",
            json!({
                "query": "embeddings",
                "lesson_number": 3
            }),
        );

        assert_eq!(call.get_arg_str("query"), Some("embeddings"));
        assert_eq!(call.get_arg_i64("lesson_number"), Some(3));
        assert_eq!(call.get_arg_str("course_name"), None);
    }

    #[test]
    fn test_tool_result() {
        let success = ToolResult::success("toolu_1", "[MCP - Lesson 1]\nServers expose tools.");
        assert!(!success.is_error);

        let error = ToolResult::error("toolu_2", "Error executing tool: store offline");
        assert!(error.is_error);
    }

    #[test]
    fn test_tool_choice_wire_format() {
        let json = serde_json::to_value(ToolChoice::Auto).unwrap();
        assert_eq!(json, json!({"type": "auto"}));
    }
}
