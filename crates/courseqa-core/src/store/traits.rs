//! Course store trait

use async_trait::async_trait;

use super::error::StoreResult;
use super::types::{Course, SearchQuery, SearchResults};

/// Lookups the tools need from the course catalog and passage index
///
/// Implementations:
/// - `InMemoryCourseStore`: term-overlap search, for tests and demos
/// - Vector databases, behind the same contract
#[async_trait]
pub trait CourseStore: Send + Sync {
    /// Resolve a possibly partial course name to a stored course title
    async fn resolve_course_name(&self, name: &str) -> StoreResult<Option<String>>;

    /// Filtered passage search
    ///
    /// An unresolvable course filter yields an error marker, not an `Err`.
    async fn search(&self, query: &SearchQuery) -> StoreResult<SearchResults>;

    /// Link to the course page
    async fn course_link(&self, course_title: &str) -> StoreResult<Option<String>>;

    /// Link to a specific lesson
    async fn lesson_link(&self, course_title: &str, lesson_number: u32) -> StoreResult<Option<String>>;

    /// Full course metadata by exact title
    async fn course(&self, course_title: &str) -> StoreResult<Option<Course>>;

    /// All stored course titles
    async fn course_titles(&self) -> StoreResult<Vec<String>>;
}
