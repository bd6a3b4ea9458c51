use crate::tools::registry::ToolRegistry;
use crate::types::{ToolError, ToolResult};
use serde_json::Value;
use std::sync::Arc;

/// Executes tool invocations: name lookup, argument validation, bounded
/// execution, and conversion of every fault into a [`ToolResult`] value.
///
/// This is the last line of defense — nothing the handlers or their
/// external calls raise crosses this boundary as anything but data.
pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub async fn invoke(&self, tool_name: &str, arguments: Value) -> ToolResult {
        let Some(tool) = self.registry.get(tool_name) else {
            return ToolResult::failure(ToolError::UnknownTool(tool_name.to_string()));
        };

        // A missing body means "no arguments", not a malformed call.
        let arguments = if arguments.is_null() {
            Value::Object(serde_json::Map::new())
        } else {
            arguments
        };

        if let Err(error) = validate_arguments(&tool.parameters_schema(), &arguments) {
            return ToolResult::failure(error);
        }

        let budget = tool.timeout();
        tracing::debug!(tool = tool_name, "invoking tool");

        // The handler runs in its own task so a panic is contained as a
        // JoinError instead of unwinding through the gateway.
        let mut task = tokio::spawn(async move { tool.execute(arguments).await });

        match tokio::time::timeout(budget, &mut task).await {
            Err(_) => {
                task.abort();
                tracing::warn!(tool = tool_name, ?budget, "tool timed out");
                ToolResult::failure(ToolError::Timeout(format!(
                    "tool '{}' exceeded its {}s budget",
                    tool_name,
                    budget.as_secs()
                )))
            }
            Ok(Err(join_error)) => {
                tracing::error!(tool = tool_name, %join_error, "tool task failed");
                ToolResult::failure(ToolError::ExecutionError(format!(
                    "tool '{}' aborted: {}",
                    tool_name, join_error
                )))
            }
            Ok(Ok(Err(tool_error))) => {
                tracing::warn!(tool = tool_name, error = %tool_error, "tool returned an error");
                ToolResult::failure(tool_error)
            }
            Ok(Ok(Ok(output))) => ToolResult::success(output),
        }
    }
}

/// Check `arguments` against a tool's parameter schema: required parameters
/// must be present and provided values must match the declared JSON type.
/// Unknown parameters are ignored.
fn validate_arguments(schema: &Value, arguments: &Value) -> Result<(), ToolError> {
    let Some(provided) = arguments.as_object() else {
        return Err(ToolError::InvalidInput(
            "arguments must be a JSON object".to_string(),
        ));
    };

    if let Some(required) = schema.get("required").and_then(Value::as_array) {
        for name in required.iter().filter_map(Value::as_str) {
            if !provided.contains_key(name) {
                return Err(ToolError::InvalidInput(format!(
                    "missing required parameter '{}'",
                    name
                )));
            }
        }
    }

    if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
        for (name, value) in provided {
            let declared = properties
                .get(name)
                .and_then(|p| p.get("type"))
                .and_then(Value::as_str);
            if let Some(expected) = declared {
                if !type_matches(expected, value) {
                    return Err(ToolError::InvalidInput(format!(
                        "parameter '{}' must be of type {}",
                        name, expected
                    )));
                }
            }
        }
    }

    Ok(())
}

fn type_matches(expected: &str, value: &Value) -> bool {
    match expected {
        "string" => value.is_string(),
        "integer" => value.is_i64() || value.is_u64(),
        "number" => value.is_number(),
        "boolean" => value.is_boolean(),
        "object" => value.is_object(),
        "array" => value.is_array(),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_required_parameter_names_the_field() {
        let schema = json!({
            "type": "object",
            "properties": { "query": { "type": "string" } },
            "required": ["query"]
        });
        let err = validate_arguments(&schema, &json!({})).unwrap_err();
        assert_eq!(err.kind(), "invalid_input");
        assert!(err.message().contains("'query'"));
    }

    #[test]
    fn test_type_mismatch_names_the_field() {
        let schema = json!({
            "type": "object",
            "properties": { "query": { "type": "string" } },
            "required": ["query"]
        });
        let err = validate_arguments(&schema, &json!({ "query": 7 })).unwrap_err();
        assert!(err.message().contains("'query'"));
        assert!(err.message().contains("string"));
    }

    #[test]
    fn test_unknown_parameters_are_ignored() {
        let schema = json!({
            "type": "object",
            "properties": { "query": { "type": "string" } },
            "required": ["query"]
        });
        assert!(validate_arguments(&schema, &json!({ "query": "x", "extra": 1 })).is_ok());
    }

    #[test]
    fn test_non_object_arguments_are_rejected() {
        let schema = json!({ "type": "object", "properties": {} });
        let err = validate_arguments(&schema, &json!([1, 2])).unwrap_err();
        assert_eq!(err.kind(), "invalid_input");
    }
}
