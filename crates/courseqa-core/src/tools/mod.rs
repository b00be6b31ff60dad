//! Tool management module
//!
//! Capabilities the model can invoke, and the registry that dispatches them.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  ToolRegistry                               │
//! │                                             │
//! │  - Advertises schemas in registration order │
//! │  - Dispatches calls by name                 │
//! │  - Buffers sources until drained            │
//! └─────────────────────────────────────────────┘
//!           │
//!           │ Capability::execute
//!           ▼
//! ┌─────────────────────────────────────────────┐
//! │  search_course_content, get_course_outline  │
//! │            (backed by a CourseStore)        │
//! └─────────────────────────────────────────────┘
//! ```

mod error;
mod outline;
mod registry;
mod search;
mod traits;

pub use error::ToolError;
pub use outline::{CourseOutlineTool, OUTLINE_TOOL_NAME};
pub use registry::ToolRegistry;
pub use search::{CourseSearchTool, SEARCH_TOOL_NAME};
pub use traits::{Capability, ToolOutput};
