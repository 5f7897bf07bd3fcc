use std::net::SocketAddr;
use std::sync::Arc;
use anyhow::Context;
use axum::http::HeaderValue;
use axum::Router;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use crate::config::Config;
use crate::helpers::handler_404::page_not_found_handler;
use crate::tools::ToolRegistry;

pub mod health_check;
pub mod tools_controller;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ToolRegistry>,
}

pub async fn serve(
    app_state: AppState,
    config: &Config,
) -> anyhow::Result<()> {
    let application = application(app_state, config);

    let port = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("Maps tool server ({}) listening on port: {}", config.environment, port);
    axum::Server::bind(&port)
        .serve(application.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Error spinning up the API server")
}

/// The routes wrapped in CORS, gzip and the request limit. `Router::layer`
/// wraps every route separately, so the limit shares one semaphore across
/// all of them and `max_concurrent_requests` caps the whole server.
pub fn application(app_state: AppState, config: &Config) -> Router {
    let origins: Vec<HeaderValue> = config
        .origin_urls
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| match s.parse() {
            Ok(origin) => Some(origin),
            Err(e) => {
                warn!("Ignoring invalid origin url {} due to: {}", s, e);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    router_endpoints(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    CorsLayer::new()
                        .allow_methods([
                            Method::GET,
                            Method::POST,
                            Method::OPTIONS
                        ])
                        .allow_origin(origins)
                        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
                )
                .layer(CompressionLayer::new())
                .layer(GlobalConcurrencyLimitLayer::new(config.max_concurrent_requests))
        )
}

pub fn router_endpoints(app_state: AppState) -> Router {
    health_check::router(app_state.clone())
        .nest("/tools", tools_controller::router(app_state))
        .fallback(page_not_found_handler)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal due to: {}", e);
        return;
    }
    info!("Shutdown signal received, stopping server");
}
