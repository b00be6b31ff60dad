//! In-memory course store

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use super::error::{StoreError, StoreResult};
use super::traits::CourseStore;
use super::types::{Course, CourseChunk, SearchHit, SearchQuery, SearchResults};

/// Default number of hits per search
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Minimum normalized Levenshtein similarity for a fuzzy course match
const MIN_NAME_SIMILARITY: f64 = 0.5;

/// In-memory course catalog with term-overlap passage search
///
/// Ranking is by the fraction of query terms a passage contains; passages
/// sharing no term with the query are never returned.
#[derive(Debug)]
pub struct InMemoryCourseStore {
    courses: RwLock<Vec<Course>>,
    chunks: RwLock<Vec<CourseChunk>>,
    max_results: usize,
    available: AtomicBool,
}

impl Default for InMemoryCourseStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCourseStore {
    pub fn new() -> Self {
        Self::with_max_results(DEFAULT_MAX_RESULTS)
    }

    pub fn with_max_results(max_results: usize) -> Self {
        Self {
            courses: RwLock::new(Vec::new()),
            chunks: RwLock::new(Vec::new()),
            max_results,
            available: AtomicBool::new(true),
        }
    }

    /// Add or replace a course (matched by title)
    pub fn add_course(&self, course: Course) {
        let mut courses = self.courses.write();
        match courses.iter_mut().find(|c| c.title == course.title) {
            Some(existing) => *existing = course,
            None => courses.push(course),
        }
    }

    /// Add passages to the index
    pub fn add_chunks(&self, chunks: impl IntoIterator<Item = CourseChunk>) {
        self.chunks.write().extend(chunks);
    }

    pub fn course_count(&self) -> usize {
        self.courses.read().len()
    }

    /// Remove all courses and passages
    pub fn clear(&self) {
        self.courses.write().clear();
        self.chunks.write().clear();
    }

    /// Simulate the backing store going offline (or coming back)
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn ensure_available(&self) -> StoreResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Unavailable("in-memory store is offline".to_string()))
        }
    }

    fn resolve(&self, name: &str) -> Option<String> {
        let courses = self.courses.read();
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        if let Some(c) = courses.iter().find(|c| c.title.to_lowercase() == needle) {
            return Some(c.title.clone());
        }
        if let Some(c) = courses.iter().find(|c| c.title.to_lowercase().contains(&needle)) {
            return Some(c.title.clone());
        }

        courses
            .iter()
            .map(|c| (strsim::normalized_levenshtein(&c.title.to_lowercase(), &needle), c))
            .filter(|(score, _)| *score >= MIN_NAME_SIMILARITY)
            .max_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, c)| c.title.clone())
    }

    fn terms(text: &str) -> HashSet<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
            .collect()
    }
}

#[async_trait]
impl CourseStore for InMemoryCourseStore {
    async fn resolve_course_name(&self, name: &str) -> StoreResult<Option<String>> {
        self.ensure_available()?;
        Ok(self.resolve(name))
    }

    async fn search(&self, query: &SearchQuery) -> StoreResult<SearchResults> {
        self.ensure_available()?;

        let course_title = match query.course_filter() {
            Some(name) => match self.resolve(name) {
                Some(title) => Some(title),
                None => {
                    return Ok(SearchResults::with_error(format!(
                        "No course found matching '{}'",
                        name
                    )))
                }
            },
            None => None,
        };

        let query_terms = Self::terms(&query.query);
        if query_terms.is_empty() {
            return Ok(SearchResults::default());
        }

        let chunks = self.chunks.read();
        let mut scored: Vec<(f32, &CourseChunk)> = chunks
            .iter()
            .filter(|c| course_title.as_deref().map_or(true, |t| c.course_title == t))
            .filter(|c| query.lesson_number.map_or(true, |n| c.lesson_number == Some(n)))
            .filter_map(|c| {
                let chunk_terms = Self::terms(&c.content);
                let shared = query_terms.intersection(&chunk_terms).count();
                (shared > 0).then(|| (shared as f32 / query_terms.len() as f32, c))
            })
            .collect();

        scored.sort_by(|a, b| {
            b.0.total_cmp(&a.0)
                .then_with(|| a.1.chunk_index.cmp(&b.1.chunk_index))
        });

        let limit = query.limit.unwrap_or(self.max_results);
        let hits = scored
            .into_iter()
            .take(limit)
            .map(|(score, c)| SearchHit {
                text: c.content.clone(),
                course_title: Some(c.course_title.clone()),
                lesson_number: c.lesson_number,
                distance: 1.0 - score,
            })
            .collect();

        Ok(SearchResults::new(hits))
    }

    async fn course_link(&self, course_title: &str) -> StoreResult<Option<String>> {
        self.ensure_available()?;
        Ok(self
            .courses
            .read()
            .iter()
            .find(|c| c.title == course_title)
            .and_then(|c| c.course_link.clone()))
    }

    async fn lesson_link(&self, course_title: &str, lesson_number: u32) -> StoreResult<Option<String>> {
        self.ensure_available()?;
        Ok(self
            .courses
            .read()
            .iter()
            .find(|c| c.title == course_title)
            .and_then(|c| c.lesson(lesson_number))
            .and_then(|l| l.lesson_link.clone()))
    }

    async fn course(&self, course_title: &str) -> StoreResult<Option<Course>> {
        self.ensure_available()?;
        Ok(self
            .courses
            .read()
            .iter()
            .find(|c| c.title == course_title)
            .cloned())
    }

    async fn course_titles(&self) -> StoreResult<Vec<String>> {
        self.ensure_available()?;
        Ok(self.courses.read().iter().map(|c| c.title.clone()).collect())
    }
}
