//! CourseQA Core
//!
//! Tool-calling orchestration for answering questions about course materials.
//! A model answers each query, optionally calling the course search and
//! outline tools for a bounded number of rounds, while per-session history
//! is threaded into the system prompt.
//!
//! ## Tool Orchestration
//!
//! ```rust,ignore
//! use courseqa_core::{CourseAssistant, InMemoryCourseStore, Settings, TracingLogger};
//!
//! let store = Arc::new(InMemoryCourseStore::new());
//! let assistant = CourseAssistant::from_settings(&Settings::default(), store, Arc::new(TracingLogger::new()));
//!
//! let session = assistant.sessions().create_session();
//! let answer = assistant.query("What does lesson 2 of the MCP course cover?", Some(&session)).await?;
//! for source in &answer.sources {
//!     println!("{} {:?}", source.text, source.link);
//! }
//! ```

pub mod config;
pub mod generator;
pub mod logging;
pub mod providers;
pub mod secrets;
pub mod service;
pub mod session;
pub mod store;
pub mod tools;
pub mod types;

// Re-export commonly used types
pub use types::{
    ChatMessage, ContentPart, Conversation, MessageContent, MessageRole, ModelResponse, Source,
    StopReason, Tool, ToolCall, ToolChoice, ToolResult,
};

pub use secrets::{
    EnvSecretStore, MemorySecretStore, SecretStore, SecretStoreError, SecretStoreResult,
};

pub use logging::{init_subscriber, Logger, NoOpLogger, TracingLogger};

pub use config::{ConfigError, ConfigProvider, FileConfigProvider, MemoryConfigProvider, Settings};

pub use providers::{
    create_provider, ChatRequest, GenaiProvider, MockProvider, Provider, ProviderError,
    ProviderModelConfig, ProviderResult,
};

pub use store::{
    Course, CourseChunk, CourseStore, InMemoryCourseStore, Lesson, SearchQuery, SearchResults,
    StoreError,
};

pub use tools::{Capability, CourseOutlineTool, CourseSearchTool, ToolError, ToolOutput, ToolRegistry};

pub use generator::ResponseGenerator;

pub use session::SessionManager;

pub use service::{CourseAnalytics, CourseAssistant, QueryAnswer, QueryError};
