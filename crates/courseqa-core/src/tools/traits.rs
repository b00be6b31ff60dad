//! Capability trait

use async_trait::async_trait;
use serde_json::Value;

use super::error::ToolError;
use crate::types::{Source, Tool};

/// What a capability hands back: text for the model, attributions for the caller
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolOutput {
    pub content: String,
    pub sources: Vec<Source>,
}

impl ToolOutput {
    /// Output with no source attributions
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            sources: Vec::new(),
        }
    }

    pub fn with_sources(content: impl Into<String>, sources: Vec<Source>) -> Self {
        Self {
            content: content.into(),
            sources,
        }
    }
}

/// A named operation the model can invoke
///
/// "Nothing found" is not an error: describe it in the output text. Return
/// `Err` only for failures the model should see as a tool error.
#[async_trait]
pub trait Capability: Send + Sync {
    /// Name the model calls this capability by
    fn name(&self) -> &str;

    /// Schema entry advertised to the model
    fn schema(&self) -> Tool;

    async fn execute(&self, input: &Value) -> Result<ToolOutput, ToolError>;
}
