use std::sync::Arc;
use axum::{Extension, Json, Router};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use serde_json::Value;
use tracing::{info, warn};
use crate::controller::AppState;
use crate::tools::ToolRegistry;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(list_tools))
        .route("/:name", post(invoke_tool))
        .route_layer(Extension(app_state.registry))
}

pub async fn list_tools(
    Extension(registry): Extension<Arc<ToolRegistry>>,
) -> impl IntoResponse {
    Json(registry.descriptors())
}

/// The body is the tool's string result either way: JSON text on success,
/// a "Failed to ..." line otherwise.
pub async fn invoke_tool(
    Extension(registry): Extension<Arc<ToolRegistry>>,
    Path(name): Path<String>,
    Json(arguments): Json<Value>,
) -> impl IntoResponse {
    info!("Invoking tool: {}", name);
    let invoke_res = registry.invoke(&name, arguments).await;

    return match invoke_res {
        Ok(body) => {
            (StatusCode::OK, body).into_response()
        }
        Err(e) => {
            warn!("Something went wrong invoking tool {} due to: {}", name, e);
            (StatusCode::NOT_FOUND, e.to_string()).into_response()
        }
    };
}
