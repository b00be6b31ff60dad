//! Source attribution types

use serde::{Deserialize, Serialize};

/// Where a piece of retrieved material came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Display text, e.g. "Intro to RAG - Lesson 2"
    pub text: String,
    /// Deep link to the lesson or course, when known
    pub link: Option<String>,
}

impl Source {
    pub fn new(text: impl Into<String>, link: Option<String>) -> Self {
        Self {
            text: text.into(),
            link,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_serializes_missing_link_as_null() {
        let source = Source::new("Intro - Lesson 1", None);
        let json = serde_json::to_string(&source).unwrap();
        assert_eq!(json, r#"{"text":"Intro - Lesson 1","link":null}"#);
    }
}
