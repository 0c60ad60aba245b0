use std::sync::Arc;

use anyhow::Context;
use skybrief::{AppState, SkyBriefConfig, web};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SkyBriefConfig::load().context("Failed to load configuration")?;
    let state =
        Arc::new(AppState::new(config).context("Failed to initialise application state")?);

    web::run(state).await
}
