//! In-memory session store

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::types::{ChatMessage, MessageRole};

/// Exchanges (user + assistant pairs) kept per session
pub const DEFAULT_MAX_HISTORY: usize = 2;

/// Session histories keyed by session id
#[derive(Debug)]
pub struct SessionManager {
    sessions: RwLock<HashMap<String, Vec<ChatMessage>>>,
    counter: AtomicU64,
    max_history: usize,
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY)
    }
}

impl SessionManager {
    pub fn new(max_history: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            counter: AtomicU64::new(0),
            max_history,
        }
    }

    /// Start an empty session and return its id (`session_1`, `session_2`, ...)
    pub fn create_session(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let id = format!("session_{}", n);
        self.sessions.write().insert(id.clone(), Vec::new());
        id
    }

    pub fn has_session(&self, session_id: &str) -> bool {
        self.sessions.read().contains_key(session_id)
    }

    /// Record one exchange; unknown ids start a new session under that id
    pub fn add_exchange(&self, session_id: &str, user: &str, assistant: &str) {
        let mut sessions = self.sessions.write();
        let messages = sessions.entry(session_id.to_string()).or_default();
        messages.push(ChatMessage::user(user));
        messages.push(ChatMessage::assistant(assistant));

        let keep = self.max_history * 2;
        if messages.len() > keep {
            let excess = messages.len() - keep;
            messages.drain(..excess);
        }
    }

    /// Recent exchanges as `User: ...` / `Assistant: ...` lines
    ///
    /// `None` when the session is unknown or has no messages yet.
    pub fn get_conversation_history(&self, session_id: &str) -> Option<String> {
        let sessions = self.sessions.read();
        let messages = sessions.get(session_id).filter(|m| !m.is_empty())?;

        let lines: Vec<String> = messages
            .iter()
            .map(|m| {
                let speaker = match m.role {
                    MessageRole::User => "User",
                    MessageRole::Assistant => "Assistant",
                };
                format!("{}: {}", speaker, m.text().unwrap_or_default())
            })
            .collect();
        Some(lines.join("\n"))
    }

    /// Forget a session's messages (the id stays valid)
    pub fn clear_session(&self, session_id: &str) {
        if let Some(messages) = self.sessions.write().get_mut(session_id) {
            messages.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_ids_are_sequential() {
        let sessions = SessionManager::default();
        assert_eq!(sessions.create_session(), "session_1");
        assert_eq!(sessions.create_session(), "session_2");
        assert!(sessions.has_session("session_2"));
        assert!(!sessions.has_session("session_3"));
    }

    #[test]
    fn test_history_format() {
        let sessions = SessionManager::default();
        let id = sessions.create_session();
        assert_eq!(sessions.get_conversation_history(&id), None);

        sessions.add_exchange(&id, "What is RAG?", "Retrieval-augmented generation.");
        assert_eq!(
            sessions.get_conversation_history(&id).as_deref(),
            Some("User: What is RAG?\nAssistant: Retrieval-augmented generation.")
        );
    }

    #[test]
    fn test_history_is_bounded() {
        let sessions = SessionManager::new(2);
        let id = sessions.create_session();
        for i in 1..=3 {
            sessions.add_exchange(&id, &format!("q{}", i), &format!("a{}", i));
        }

        assert_eq!(
            sessions.get_conversation_history(&id).as_deref(),
            Some("User: q2\nAssistant: a2\nUser: q3\nAssistant: a3")
        );
    }

    #[test]
    fn test_unknown_and_cleared_sessions() {
        let sessions = SessionManager::default();
        assert_eq!(sessions.get_conversation_history("nope"), None);

        sessions.add_exchange("external", "hi", "hello");
        assert!(sessions.get_conversation_history("external").is_some());

        sessions.clear_session("external");
        assert_eq!(sessions.get_conversation_history("external"), None);
        assert!(sessions.has_session("external"));
    }
}
