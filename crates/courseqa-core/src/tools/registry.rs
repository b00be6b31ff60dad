//! Tool registry for model tool calling
//!
//! The ToolRegistry is the central component for:
//! - Holding the capabilities the model may invoke, in registration order
//! - Advertising their schemas to the model
//! - Dispatching tool calls by name
//! - Buffering the source attributions produced by dispatches

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use serde_json::Value;

use super::error::ToolError;
use super::traits::{Capability, ToolOutput};
use crate::logging::Logger;
use crate::types::{Source, Tool};

/// Name-indexed table of capabilities
#[derive(Default)]
struct CapabilityTable {
    index: HashMap<String, usize>,
    entries: Vec<Arc<dyn Capability>>,
}

/// Registry of tools available to the model
///
/// Sources from every successful dispatch accumulate in a shared buffer until
/// the caller drains it, so one registry should serve one query at a time.
pub struct ToolRegistry {
    table: RwLock<CapabilityTable>,
    sources: Mutex<Vec<Source>>,
    logger: Arc<dyn Logger>,
}

impl ToolRegistry {
    /// Create an empty tool registry
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            table: RwLock::new(CapabilityTable::default()),
            sources: Mutex::new(Vec::new()),
            logger,
        }
    }

    /// Register a capability under its declared name
    ///
    /// Re-registering a name replaces the capability but keeps its position.
    pub fn register(&self, capability: Arc<dyn Capability>) {
        let name = capability.name().to_string();
        let mut table = self.table.write();

        match table.index.get(&name).copied() {
            Some(slot) => {
                self.logger
                    .warn(&format!("[ToolRegistry] Replacing tool: {}", name));
                table.entries[slot] = capability;
            }
            None => {
                let slot = table.entries.len();
                table.entries.push(capability);
                table.index.insert(name.clone(), slot);
                self.logger
                    .info(&format!("[ToolRegistry] Registered tool: {}", name));
            }
        }
    }

    /// Schemas of every registered tool, in registration order
    pub fn get_schemas(&self) -> Vec<Tool> {
        self.table.read().entries.iter().map(|c| c.schema()).collect()
    }

    fn lookup(&self, name: &str) -> Option<Arc<dyn Capability>> {
        let table = self.table.read();
        table
            .index
            .get(name)
            .map(|&slot| Arc::clone(&table.entries[slot]))
    }

    /// Execute a tool by name
    ///
    /// Sources of a successful execution are appended to the buffer.
    pub async fn dispatch(&self, name: &str, input: &Value) -> Result<String, ToolError> {
        let capability = self.lookup(name).ok_or_else(|| {
            self.logger
                .warn(&format!("[ToolRegistry] Unknown tool requested: {}", name));
            ToolError::NotFound(name.to_string())
        })?;

        self.logger
            .debug(&format!("[ToolRegistry] Calling tool: {}", name));

        let ToolOutput { content, sources } = capability.execute(input).await.map_err(|e| {
            self.logger
                .warn(&format!("[ToolRegistry] Tool {} failed: {}", name, e));
            e
        })?;

        if !sources.is_empty() {
            self.sources.lock().extend(sources);
        }
        Ok(content)
    }

    /// Copy of the buffered sources
    pub fn collect_sources(&self) -> Vec<Source> {
        self.sources.lock().clone()
    }

    /// Clear the buffered sources
    pub fn reset_sources(&self) {
        self.sources.lock().clear();
    }

    /// Drain the buffered sources
    pub fn take_sources(&self) -> Vec<Source> {
        std::mem::take(&mut *self.sources.lock())
    }

    /// Get count of registered tools
    pub fn tool_count(&self) -> usize {
        self.table.read().entries.len()
    }

    pub fn has_tool(&self, name: &str) -> bool {
        self.table.read().index.contains_key(name)
    }

    /// Registered tool names, in registration order
    pub fn tool_names(&self) -> Vec<String> {
        self.table
            .read()
            .entries
            .iter()
            .map(|c| c.name().to_string())
            .collect()
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.tool_names())
            .field("buffered_sources", &self.sources.lock().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::NoOpLogger;
    use async_trait::async_trait;
    use serde_json::json;

    struct FakeTool {
        name: &'static str,
        description: &'static str,
        fail: bool,
    }

    impl FakeTool {
        fn new(name: &'static str) -> Arc<Self> {
            Arc::new(Self {
                name,
                description: "fake",
                fail: false,
            })
        }
    }

    #[async_trait]
    impl Capability for FakeTool {
        fn name(&self) -> &str {
            self.name
        }

        fn schema(&self) -> Tool {
            Tool::new(self.name, self.description)
        }

        async fn execute(&self, input: &Value) -> Result<ToolOutput, ToolError> {
            if self.fail {
                return Err(ToolError::Execution("fake failure".into()));
            }
            let q = input.get("query").and_then(Value::as_str).unwrap_or("");
            Ok(ToolOutput::with_sources(
                format!("{} ran: {}", self.name, q),
                vec![Source::new(format!("{} source", q), None)],
            ))
        }
    }

    fn registry() -> ToolRegistry {
        ToolRegistry::new(Arc::new(NoOpLogger))
    }

    #[test]
    fn test_schemas_in_registration_order() {
        let registry = registry();
        registry.register(FakeTool::new("search_course_content"));
        registry.register(FakeTool::new("get_course_outline"));

        let names: Vec<String> = registry.get_schemas().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["search_course_content", "get_course_outline"]);
        assert_eq!(registry.tool_count(), 2);
        assert!(registry.has_tool("get_course_outline"));
    }

    #[test]
    fn test_reregistration_keeps_position() {
        let registry = registry();
        registry.register(FakeTool::new("a"));
        registry.register(FakeTool::new("b"));
        registry.register(Arc::new(FakeTool {
            name: "a",
            description: "replacement",
            fail: false,
        }));

        let schemas = registry.get_schemas();
        assert_eq!(schemas.len(), 2);
        assert_eq!(schemas[0].name, "a");
        assert_eq!(schemas[0].description, "replacement");
        assert_eq!(registry.tool_names(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_dispatch_unknown_tool() {
        let registry = registry();
        let err = registry
            .dispatch("nonexistent_tool", &json!({}))
            .await
            .unwrap_err();
        assert_eq!(err, ToolError::NotFound("nonexistent_tool".into()));
        assert_eq!(err.to_string(), "Tool 'nonexistent_tool' not found");
    }

    #[tokio::test]
    async fn test_sources_accumulate_until_drained() {
        let registry = registry();
        registry.register(FakeTool::new("search"));

        registry.dispatch("search", &json!({"query": "one"})).await.unwrap();
        registry.dispatch("search", &json!({"query": "two"})).await.unwrap();

        let sources = registry.collect_sources();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[1].text, "two source");
        // collect does not drain
        assert_eq!(registry.collect_sources().len(), 2);

        registry.reset_sources();
        assert!(registry.collect_sources().is_empty());

        registry.dispatch("search", &json!({"query": "three"})).await.unwrap();
        assert_eq!(registry.take_sources().len(), 1);
        assert!(registry.take_sources().is_empty());
    }

    #[tokio::test]
    async fn test_failed_dispatch_propagates_and_records_nothing() {
        let registry = registry();
        registry.register(Arc::new(FakeTool {
            name: "broken",
            description: "fails",
            fail: true,
        }));

        let err = registry.dispatch("broken", &json!({})).await.unwrap_err();
        assert_eq!(err.to_string(), "fake failure");
        assert!(registry.collect_sources().is_empty());
    }
}
