//! Course catalog and passage search
//!
//! The search tools only see the `CourseStore` trait. `InMemoryCourseStore`
//! is the bundled implementation.

mod error;
mod memory;
mod traits;
mod types;

pub use error::{StoreError, StoreResult};
pub use memory::{InMemoryCourseStore, DEFAULT_MAX_RESULTS};
pub use traits::CourseStore;
pub use types::{Course, CourseChunk, Lesson, SearchHit, SearchQuery, SearchResults};
