use std::sync::Arc;
use axum::{Extension, Json, Router};
use axum::routing::get;
use serde::Serialize;
use crate::controller::AppState;
use crate::tools::ToolRegistry;

#[derive(Serialize, Debug)]
pub struct HealthStatus {
    pub status: &'static str,
    pub tools: usize,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(get_health_check))
        .route_layer(Extension(app_state.registry))
}

/// Liveness plus the number of registered tools; the maps provider is not
/// contacted.
async fn get_health_check(
    Extension(registry): Extension<Arc<ToolRegistry>>,
) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        tools: registry.names().len(),
    })
}
