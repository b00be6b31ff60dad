//! Course outline tool

use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde::Deserialize;
use serde_json::{json, Value};

use super::error::ToolError;
use super::traits::{Capability, ToolOutput};
use crate::store::{Course, CourseStore};
use crate::types::Tool;

pub const OUTLINE_TOOL_NAME: &str = "get_course_outline";

static OUTLINE_SCHEMA: Lazy<Tool> = Lazy::new(|| {
    Tool::new(
        OUTLINE_TOOL_NAME,
        "Get course outline including title, link, and complete lesson list",
    )
    .with_schema(json!({
        "type": "object",
        "properties": {
            "course_name": {
                "type": "string",
                "description": "Course title (partial matches work, e.g. 'MCP', 'Introduction')"
            }
        },
        "required": ["course_name"]
    }))
});

#[derive(Debug, Deserialize)]
struct OutlineArgs {
    course_name: String,
}

/// Course title, link and lesson list for a (possibly partial) course name
pub struct CourseOutlineTool {
    store: Arc<dyn CourseStore>,
}

impl CourseOutlineTool {
    pub fn new(store: Arc<dyn CourseStore>) -> Self {
        Self { store }
    }

    fn format_outline(course: &Course) -> String {
        let mut lines = vec![format!("Course: {}", course.title)];
        if let Some(link) = &course.course_link {
            lines.push(format!("Link: {}", link));
        }
        if let Some(instructor) = &course.instructor {
            lines.push(format!("Instructor: {}", instructor));
        }
        lines.push(format!("Lessons ({}):", course.lessons.len()));

        let mut lessons: Vec<_> = course.lessons.iter().collect();
        lessons.sort_by_key(|l| l.lesson_number);
        lines.extend(
            lessons
                .into_iter()
                .map(|l| format!("Lesson {}: {}", l.lesson_number, l.title)),
        );
        lines.join("\n")
    }
}

#[async_trait]
impl Capability for CourseOutlineTool {
    fn name(&self) -> &str {
        OUTLINE_TOOL_NAME
    }

    fn schema(&self) -> Tool {
        OUTLINE_SCHEMA.clone()
    }

    async fn execute(&self, input: &Value) -> Result<ToolOutput, ToolError> {
        let args: OutlineArgs = serde_json::from_value(input.clone())
            .map_err(|e| ToolError::invalid_arguments(OUTLINE_TOOL_NAME, e.to_string()))?;

        let not_found = || ToolOutput::text(format!("No course found matching '{}'", args.course_name));

        let Some(title) = self.store.resolve_course_name(&args.course_name).await? else {
            return Ok(not_found());
        };
        // resolved title can vanish between the two lookups
        let Some(course) = self.store.course(&title).await? else {
            return Ok(not_found());
        };

        Ok(ToolOutput::text(Self::format_outline(&course)))
    }
}
