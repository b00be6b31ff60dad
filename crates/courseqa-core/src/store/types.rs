//! Course catalog and search result types

use serde::{Deserialize, Serialize};

/// One lesson of a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub lesson_number: u32,
    pub title: String,
    #[serde(default)]
    pub lesson_link: Option<String>,
}

impl Lesson {
    pub fn new(lesson_number: u32, title: impl Into<String>) -> Self {
        Self {
            lesson_number,
            title: title.into(),
            lesson_link: None,
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.lesson_link = Some(link.into());
        self
    }
}

/// Course metadata; the title is the course's identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    #[serde(default)]
    pub instructor: Option<String>,
    #[serde(default)]
    pub course_link: Option<String>,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

impl Course {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            instructor: None,
            course_link: None,
            lessons: Vec::new(),
        }
    }

    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = Some(instructor.into());
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.course_link = Some(link.into());
        self
    }

    pub fn with_lesson(mut self, lesson: Lesson) -> Self {
        self.lessons.push(lesson);
        self
    }

    pub fn lesson(&self, lesson_number: u32) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.lesson_number == lesson_number)
    }
}

/// A passage of course text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseChunk {
    pub content: String,
    pub course_title: String,
    #[serde(default)]
    pub lesson_number: Option<u32>,
    pub chunk_index: usize,
}

impl CourseChunk {
    pub fn new(
        content: impl Into<String>,
        course_title: impl Into<String>,
        lesson_number: Option<u32>,
        chunk_index: usize,
    ) -> Self {
        Self {
            content: content.into(),
            course_title: course_title.into(),
            lesson_number,
            chunk_index,
        }
    }
}

/// A filtered passage search
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchQuery {
    /// Free-text query
    pub query: String,
    /// Course name to resolve; partial names are fine. Empty means no filter.
    pub course_name: Option<String>,
    /// Exact lesson filter
    pub lesson_number: Option<u32>,
    /// Maximum number of hits; the store default applies when unset
    pub limit: Option<usize>,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn with_course(mut self, course_name: impl Into<String>) -> Self {
        self.course_name = Some(course_name.into());
        self
    }

    pub fn with_lesson(mut self, lesson_number: u32) -> Self {
        self.lesson_number = Some(lesson_number);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The course filter, if it is non-empty
    pub fn course_filter(&self) -> Option<&str> {
        self.course_name.as_deref().filter(|c| !c.is_empty())
    }
}

/// One matched passage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub text: String,
    pub course_title: Option<String>,
    pub lesson_number: Option<u32>,
    /// Smaller is closer
    pub distance: f32,
}

/// Search outcome: hits, or an error marker explaining why there are none
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchResults {
    pub hits: Vec<SearchHit>,
    pub error: Option<String>,
}

impl SearchResults {
    pub fn new(hits: Vec<SearchHit>) -> Self {
        Self { hits, error: None }
    }

    /// No hits, with an explanation
    pub fn with_error(error: impl Into<String>) -> Self {
        Self {
            hits: Vec::new(),
            error: Some(error.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_builder() {
        let course = Course::new("Intro to RAG")
            .with_instructor("Dr. Smith")
            .with_link("https://example.com/rag")
            .with_lesson(Lesson::new(0, "Welcome"))
            .with_lesson(Lesson::new(1, "Chunking").with_link("https://example.com/rag/1"));

        assert_eq!(course.lessons.len(), 2);
        assert_eq!(
            course.lesson(1).and_then(|l| l.lesson_link.as_deref()),
            Some("https://example.com/rag/1")
        );
        assert!(course.lesson(7).is_none());
    }

    #[test]
    fn test_empty_course_name_is_no_filter() {
        assert_eq!(SearchQuery::new("q").with_course("").course_filter(), None);
        assert_eq!(
            SearchQuery::new("q").with_course("MCP").course_filter(),
            Some("MCP")
        );
    }

    #[test]
    fn test_error_marker() {
        let results = SearchResults::with_error("No course found matching 'Nope'");
        assert!(results.is_empty());
        assert_eq!(results.error.as_deref(), Some("No course found matching 'Nope'"));
    }
}
