//! HTTP server for the labor evaluation engine.
//!
//! Environment:
//! - `LABOR_ENGINE_CONFIG`: rules directory (default `./config/kr2025`)
//! - `LABOR_ENGINE_ADDR`: listen address (default `0.0.0.0:3000`)
//! - `RUST_LOG`: log filter (default `labor_engine=info`)

use std::env;

use labor_engine::api::{AppState, create_router};
use labor_engine::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config/kr2025";
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("labor_engine=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config_dir = env::var("LABOR_ENGINE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let addr = env::var("LABOR_ENGINE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.into());

    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        rules_version = %config.rules().version,
        "Rules loaded"
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Listening");
    axum::serve(listener, create_router(AppState::new(config))).await?;

    Ok(())
}
