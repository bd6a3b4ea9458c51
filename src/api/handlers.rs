use crate::types::{ToolDefinition, ToolResult};
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "portico tool gateway",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Advertise the tool catalogue: name, description and input schema for
/// every registered operation, in registration order.
pub async fn list_tools(State(state): State<AppState>) -> Json<Vec<ToolDefinition>> {
    Json(state.registry.definitions())
}

/// Invoke a tool by name. Outcomes — including failures — come back as a
/// [`ToolResult`] value with HTTP 200, so the agent can reason about them.
pub async fn invoke_tool(
    State(state): State<AppState>,
    Path(tool_name): Path<String>,
    body: Option<Json<Value>>,
) -> Json<ToolResult> {
    let arguments = body.map(|Json(v)| v).unwrap_or(Value::Null);
    Json(state.dispatcher.invoke(&tool_name, arguments).await)
}
