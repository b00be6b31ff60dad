//! Core types for model interactions
//!
//! This module contains all the shared types used by the tool loop, the
//! providers, and the tools.

mod message;
mod tool;
mod response;
mod conversation;
mod source;

pub use message::{ChatMessage, ContentPart, MessageRole, MessageContent};
pub use tool::{Tool, ToolCall, ToolResult, ToolChoice};
pub use response::{ModelResponse, StopReason};
pub use conversation::Conversation;
pub use source::Source;
