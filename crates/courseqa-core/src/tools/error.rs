//! Tool error types

use thiserror::Error;

use crate::store::StoreError;

/// Errors from looking up or executing a tool
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// No capability is registered under this name
    #[error("Tool '{0}' not found")]
    NotFound(String),

    /// The input did not decode into the tool's argument shape
    #[error("Invalid arguments for '{tool}': {message}")]
    InvalidArguments { tool: String, message: String },

    #[error("{0}")]
    Execution(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ToolError {
    pub fn invalid_arguments(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArguments {
            tool: tool.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ToolError::NotFound("nonexistent_tool".into()).to_string(),
            "Tool 'nonexistent_tool' not found"
        );
        assert_eq!(ToolError::Execution("boom".into()).to_string(), "boom");
        assert_eq!(
            ToolError::from(StoreError::Unavailable("down".into())).to_string(),
            "course store unavailable: down"
        );
    }
}
