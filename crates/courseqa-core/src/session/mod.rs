//! Conversation sessions
//!
//! Each session keeps the most recent exchanges and renders them as plain
//! text for the system prompt.

mod manager;

pub use manager::{SessionManager, DEFAULT_MAX_HISTORY};
