//! Course content search tool

use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde::Deserialize;
use serde_json::{json, Value};

use super::error::ToolError;
use super::traits::{Capability, ToolOutput};
use crate::store::{CourseStore, SearchHit, SearchQuery};
use crate::types::{Source, Tool};

pub const SEARCH_TOOL_NAME: &str = "search_course_content";

static SEARCH_SCHEMA: Lazy<Tool> = Lazy::new(|| {
    Tool::new(
        SEARCH_TOOL_NAME,
        "Search course materials with smart course name matching and lesson filtering",
    )
    .with_schema(json!({
        "type": "object",
        "properties": {
            "query": {
                "type": "string",
                "description": "What to search for in the course content"
            },
            "course_name": {
                "type": "string",
                "description": "Course title (partial matches work, e.g. 'MCP', 'Introduction')"
            },
            "lesson_number": {
                "type": "integer",
                "description": "Specific lesson number to search within (e.g. 1, 2, 3)"
            }
        },
        "required": ["query"]
    }))
});

#[derive(Debug, Deserialize)]
struct SearchArgs {
    query: String,
    #[serde(default)]
    course_name: Option<String>,
    #[serde(default)]
    lesson_number: Option<u32>,
}

/// Semantic search over course passages, with optional course and lesson filters
pub struct CourseSearchTool {
    store: Arc<dyn CourseStore>,
}

impl CourseSearchTool {
    pub fn new(store: Arc<dyn CourseStore>) -> Self {
        Self { store }
    }

    fn no_results_message(course_name: Option<&str>, lesson_number: Option<u32>) -> String {
        let mut message = String::from("No relevant content found");
        if let Some(course) = course_name.filter(|c| !c.is_empty()) {
            message.push_str(&format!(" in course '{}'", course));
        }
        if let Some(lesson) = lesson_number {
            message.push_str(&format!(" in lesson {}", lesson));
        }
        message.push('.');
        message
    }

    fn label(hit: &SearchHit) -> String {
        let course = hit.course_title.as_deref().unwrap_or("unknown");
        match hit.lesson_number {
            Some(n) => format!("{} - Lesson {}", course, n),
            None => course.to_string(),
        }
    }

    async fn link_for(&self, hit: &SearchHit) -> Result<Option<String>, ToolError> {
        let Some(course) = hit.course_title.as_deref() else {
            return Ok(None);
        };
        if let Some(lesson) = hit.lesson_number {
            if let Some(link) = self.store.lesson_link(course, lesson).await? {
                return Ok(Some(link));
            }
        }
        Ok(self.store.course_link(course).await?)
    }
}

#[async_trait]
impl Capability for CourseSearchTool {
    fn name(&self) -> &str {
        SEARCH_TOOL_NAME
    }

    fn schema(&self) -> Tool {
        SEARCH_SCHEMA.clone()
    }

    async fn execute(&self, input: &Value) -> Result<ToolOutput, ToolError> {
        let args: SearchArgs = serde_json::from_value(input.clone())
            .map_err(|e| ToolError::invalid_arguments(SEARCH_TOOL_NAME, e.to_string()))?;

        let mut query = SearchQuery::new(&args.query);
        query.course_name = args.course_name.clone();
        query.lesson_number = args.lesson_number;

        let results = self.store.search(&query).await?;

        if let Some(marker) = results.error {
            return Ok(ToolOutput::text(marker));
        }
        if results.is_empty() {
            return Ok(ToolOutput::text(Self::no_results_message(
                args.course_name.as_deref(),
                args.lesson_number,
            )));
        }

        let mut passages = Vec::with_capacity(results.hits.len());
        let mut sources = Vec::with_capacity(results.hits.len());
        for hit in &results.hits {
            let label = Self::label(hit);
            passages.push(format!("[{}]\n{}", label, hit.text));
            sources.push(Source::new(label, self.link_for(hit).await?));
        }

        Ok(ToolOutput::with_sources(passages.join("\n\n"), sources))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{
        Course, CourseChunk, InMemoryCourseStore, Lesson, SearchResults, StoreError, StoreResult,
    };
    use parking_lot::Mutex;

    /// Store that returns canned results and records the queries it saw
    struct CannedStore {
        results: SearchResults,
        seen: Mutex<Vec<SearchQuery>>,
    }

    impl CannedStore {
        fn new(results: SearchResults) -> Arc<Self> {
            Arc::new(Self {
                results,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl CourseStore for CannedStore {
        async fn resolve_course_name(&self, _name: &str) -> StoreResult<Option<String>> {
            Ok(None)
        }
        async fn search(&self, query: &SearchQuery) -> StoreResult<SearchResults> {
            self.seen.lock().push(query.clone());
            Ok(self.results.clone())
        }
        async fn course_link(&self, _course_title: &str) -> StoreResult<Option<String>> {
            Ok(Some("https://example.com/course".into()))
        }
        async fn lesson_link(&self, _course_title: &str, lesson: u32) -> StoreResult<Option<String>> {
            Ok((lesson == 1).then(|| "https://example.com/lesson1".to_string()))
        }
        async fn course(&self, _course_title: &str) -> StoreResult<Option<Course>> {
            Ok(None)
        }
        async fn course_titles(&self) -> StoreResult<Vec<String>> {
            Ok(Vec::new())
        }
    }

    fn hit(text: &str, course: Option<&str>, lesson: Option<u32>) -> SearchHit {
        SearchHit {
            text: text.into(),
            course_title: course.map(String::from),
            lesson_number: lesson,
            distance: 0.1,
        }
    }

    #[tokio::test]
    async fn test_no_results_with_filters() {
        let tool = CourseSearchTool::new(CannedStore::new(SearchResults::default()));
        let output = tool
            .execute(&json!({
                "query": "nonexistent topic",
                "course_name": "Test Course",
                "lesson_number": 5
            }))
            .await
            .unwrap();

        assert_eq!(
            output.content,
            "No relevant content found in course 'Test Course' in lesson 5."
        );
        assert!(output.sources.is_empty());
    }

    #[tokio::test]
    async fn test_no_results_messages() {
        let tool = CourseSearchTool::new(CannedStore::new(SearchResults::default()));

        let plain = tool.execute(&json!({"query": "x"})).await.unwrap();
        assert_eq!(plain.content, "No relevant content found.");

        let lesson_only = tool
            .execute(&json!({"query": "x", "lesson_number": 2}))
            .await
            .unwrap();
        assert_eq!(lesson_only.content, "No relevant content found in lesson 2.");
    }

    #[tokio::test]
    async fn test_error_marker_returned_verbatim() {
        let tool = CourseSearchTool::new(CannedStore::new(SearchResults::with_error(
            "No course found matching 'Nope'",
        )));
        let output = tool
            .execute(&json!({"query": "x", "course_name": "Nope"}))
            .await
            .unwrap();
        assert_eq!(output.content, "No course found matching 'Nope'");
        assert!(output.sources.is_empty());
    }

    #[tokio::test]
    async fn test_formats_hits_and_sources() {
        let tool = CourseSearchTool::new(CannedStore::new(SearchResults::new(vec![
            hit("First passage", Some("Intro to RAG"), Some(1)),
            hit("Second passage", Some("Intro to RAG"), Some(2)),
            hit("Third passage", None, None),
        ])));

        let output = tool.execute(&json!({"query": "passage"})).await.unwrap();

        assert_eq!(
            output.content,
            "[Intro to RAG - Lesson 1]\nFirst passage\n\n\
             [Intro to RAG - Lesson 2]\nSecond passage\n\n\
             [unknown]\nThird passage"
        );
        assert_eq!(
            output.sources,
            vec![
                Source::new("Intro to RAG - Lesson 1", Some("https://example.com/lesson1".into())),
                Source::new("Intro to RAG - Lesson 2", Some("https://example.com/course".into())),
                Source::new("unknown", None),
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_course_name_passed_through() {
        let store = CannedStore::new(SearchResults::default());
        let tool = CourseSearchTool::new(store.clone());
        let output = tool
            .execute(&json!({"query": "x", "course_name": ""}))
            .await
            .unwrap();

        assert_eq!(store.seen.lock()[0].course_name.as_deref(), Some(""));
        assert_eq!(output.content, "No relevant content found.");
    }

    #[tokio::test]
    async fn test_invalid_arguments() {
        let tool = CourseSearchTool::new(CannedStore::new(SearchResults::default()));
        let err = tool.execute(&json!({"course_name": "x"})).await.unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments { .. }));
    }

    #[tokio::test]
    async fn test_store_failure_is_error() {
        let store = Arc::new(InMemoryCourseStore::new());
        store.set_available(false);
        let tool = CourseSearchTool::new(store);

        let err = tool.execute(&json!({"query": "x"})).await.unwrap_err();
        assert_eq!(err, ToolError::Store(StoreError::Unavailable("in-memory store is offline".into())));
    }

    #[tokio::test]
    async fn test_against_in_memory_store() {
        let store = Arc::new(InMemoryCourseStore::new());
        store.add_course(
            Course::new("Building Towards Computer Use")
                .with_link("https://example.com/cu")
                .with_lesson(Lesson::new(3, "Tool use").with_link("https://example.com/cu/3")),
        );
        store.add_chunks(vec![CourseChunk::new(
            "Claude can call tools to act on a computer.",
            "Building Towards Computer Use",
            Some(3),
            0,
        )]);
        let tool = CourseSearchTool::new(store);

        let output = tool
            .execute(&json!({"query": "call tools", "course_name": "Computer"}))
            .await
            .unwrap();

        assert!(output.content.starts_with("[Building Towards Computer Use - Lesson 3]\n"));
        assert_eq!(output.sources[0].link.as_deref(), Some("https://example.com/cu/3"));
    }

    #[test]
    fn test_schema() {
        let schema = CourseSearchTool::new(CannedStore::new(SearchResults::default())).schema();
        assert_eq!(schema.name, "search_course_content");
        assert_eq!(schema.required_params(), vec!["query"]);
    }
}
