use allotment_core::conf::config::read_config;
use allotment_rest::router;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "allotment_rest=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config/config.yaml"));
    let config = read_config(&config_path)
        .with_context(|| format!("failed to load service config from {}", config_path.display()))?;

    let address = format!("{}:{}", config.bind_host(), config.rest_port());
    let listener = TcpListener::bind(&address).await?;
    tracing::info!("allotment rest listening on {}", address);
    axum::serve(listener, router()).await?;
    Ok(())
}
