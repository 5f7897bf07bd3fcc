use std::sync::Arc;
use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use tracing::info;
use travel_maps_tools::config::Config;
use travel_maps_tools::controller::{self, AppState};
use travel_maps_tools::repositories::{GoogleMapsRepo, HttpMapsApi};
use travel_maps_tools::tools::ToolRegistry;

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::parse();

    // The blocking HTTP client has to be built before entering the runtime.
    let maps_api = HttpMapsApi::new(&config.google_maps_api_key, &config.maps_base_url)
        .context("Failed to initialise the Google Maps client")?;
    let maps_repo = Arc::new(GoogleMapsRepo::new(Arc::new(maps_api)));
    let registry = Arc::new(ToolRegistry::new(maps_repo));
    info!("Available tools: {}", registry.names().join(", "));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .max_blocking_threads(config.blocking_threads())
        .build()
        .context("Failed to build the tokio runtime")?;

    // Keep a handle here so the blocking client is released outside the runtime.
    let app_state = AppState { registry: Arc::clone(&registry) };
    let served = runtime.block_on(controller::serve(app_state, &config));
    drop(runtime);
    drop(registry);
    served
}
