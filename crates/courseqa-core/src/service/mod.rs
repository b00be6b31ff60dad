//! Course assistant: the caller of the response generator
//!
//! Wraps the user's question, threads session history in, drains the source
//! attributions the tools produced and records the exchange.

mod assistant;
mod error;

pub use assistant::{CourseAnalytics, CourseAssistant, QueryAnswer, ANSWER_PREFIX};
pub use error::{QueryError, QueryResult};
