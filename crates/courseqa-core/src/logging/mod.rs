//! Logging abstractions
//!
//! Components take an `Arc<dyn Logger>`; production code passes a
//! `TracingLogger`, tests pass a `NoOpLogger`.

mod traits;
mod noop;
mod tracing_logger;

pub use traits::{Logger, SharedLogger};
pub use noop::NoOpLogger;
pub use tracing_logger::{TracingLogger, init_subscriber};
