use crate::types::{Result, ToolDefinition, ToolOutput};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Default execution budget for a tool, matching the timeout of the
/// external calls the built-in tools make.
pub const DEFAULT_TOOL_TIMEOUT: Duration = Duration::from_secs(10);

/// A named, schema-described operation invocable by an external agent.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn parameters_schema(&self) -> Value;

    /// Execution budget enforced by the dispatcher.
    fn timeout(&self) -> Duration {
        DEFAULT_TOOL_TIMEOUT
    }

    async fn execute(&self, args: Value) -> Result<ToolOutput>;
}

/// Raised when two tools claim the same name at startup.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("duplicate tool name: {0}")]
    DuplicateName(String),
}

/// The catalogue of available operations.
///
/// Built once at startup and immutable afterwards — consumers hold it
/// behind an `Arc` and only read. Iteration order is registration order,
/// so schema advertisement is stable across calls.
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
    index: HashMap<String, usize>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn register(&mut self, tool: Arc<dyn Tool>) -> std::result::Result<(), RegistryError> {
        let name = tool.name().to_string();
        if self.index.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }
        self.index.insert(name, self.tools.len());
        self.tools.push(tool);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.index.get(name).map(|&i| Arc::clone(&self.tools[i]))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Advertised view of the catalogue, in registration order.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .iter()
            .map(|tool| ToolDefinition {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                parameters: tool.parameters_schema(),
            })
            .collect()
    }

    pub fn names(&self) -> Vec<String> {
        self.tools.iter().map(|t| t.name().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct NamedTool(&'static str);

    #[async_trait]
    impl Tool for NamedTool {
        fn name(&self) -> &str {
            self.0
        }

        fn description(&self) -> &str {
            "a test tool"
        }

        fn parameters_schema(&self) -> Value {
            json!({ "type": "object", "properties": {} })
        }

        async fn execute(&self, _args: Value) -> Result<ToolOutput> {
            Ok(ToolOutput::text(self.0))
        }
    }

    #[test]
    fn test_empty_registry() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get("anything").is_none());
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(NamedTool("echo"))).unwrap();
        let err = registry.register(Arc::new(NamedTool("echo"))).unwrap_err();
        assert!(err.to_string().contains("echo"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_definitions_preserve_registration_order() {
        let mut registry = ToolRegistry::new();
        for name in ["charlie", "alpha", "bravo"] {
            registry.register(Arc::new(NamedTool(name))).unwrap();
        }
        let names: Vec<String> = registry.definitions().iter().map(|d| d.name.clone()).collect();
        assert_eq!(names, vec!["charlie", "alpha", "bravo"]);
        assert_eq!(registry.names(), names);
    }

    #[test]
    fn test_lookup_after_registration() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(NamedTool("echo"))).unwrap();
        assert!(registry.contains("echo"));
        assert_eq!(registry.get("echo").unwrap().name(), "echo");
    }
}
