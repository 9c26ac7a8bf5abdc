//! Nightly Charge Engine HTTP server.
//!
//! Reads the rate configuration directory from `NIGHTLY_CHARGE_CONFIG`
//! (default `./config`) and binds to `NIGHTLY_CHARGE_ADDR`
//! (default `127.0.0.1:3000`).

use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

use nightly_charge::api::{AppState, create_router};
use nightly_charge::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_dir = std::env::var("NIGHTLY_CHARGE_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_DIR));
    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir.display(),
        rate_card = %config.config().name,
        currency = %config.currency(),
        "Configuration loaded"
    );

    let addr = std::env::var("NIGHTLY_CHARGE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Nightly charge engine listening");

    axum::serve(listener, create_router(AppState::new(config))).await?;
    Ok(())
}
