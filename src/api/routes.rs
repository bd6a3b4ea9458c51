use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(crate::api::handlers::root))
        .route("/health", get(crate::api::handlers::health))
        .route("/tools", get(crate::api::handlers::list_tools))
        .route("/tools/{tool_name}", post(crate::api::handlers::invoke_tool))
        .with_state(state)
}
