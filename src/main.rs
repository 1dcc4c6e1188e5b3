//! HTTP server for the Surcharge Engine.
//!
//! Environment:
//! - `SURCHARGE_CONFIG_DIR`: policy directory (default `./config/default`)
//! - `BIND_ADDR`: listen address (default `0.0.0.0:3000`)
//! - `RUST_LOG`: log filter (default `info`)

use surcharge_engine::api::{AppState, create_router};
use surcharge_engine::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_dir =
        std::env::var("SURCHARGE_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = ConfigLoader::load(&config_dir)?;
    let rules = *config.rules();
    info!(
        config_dir = %config_dir,
        policy = %config.policy().code,
        version = %config.policy().version,
        night_start = %rules.night_start(),
        night_end = %rules.night_end(),
        ordinary_limit = %rules.ordinary_limit(),
        sweep_step = %rules.sweep_step(),
        "Loaded surcharge policy"
    );

    let router = create_router(AppState::new(config));

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(address = %bind_addr, "Surcharge engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}
