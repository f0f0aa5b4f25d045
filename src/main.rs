use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

mod config;
mod display;
mod service;
mod workflow;

use config::Config;
use service::{PredictionApiClient, PredictionService};
use workflow::PredictionWorkflow;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the rendered prediction.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    config.validate()?;

    let client = PredictionApiClient::new(
        &config.api_url,
        Duration::from_secs(config.request_timeout_secs),
    )?;
    info!("Prediction service: {}", config.api_url);

    let service: Arc<dyn PredictionService> = Arc::new(client);
    let workflow = PredictionWorkflow::new(service);

    let catalog = workflow.load_teams().await;
    info!("{} teams available ({:?})", catalog.len(), catalog.source());

    if config.list_teams {
        print!("{}", display::render_catalog(&workflow.snapshot().await));
        return Ok(());
    }

    if let Some(home) = &config.home {
        workflow.select_home(home).await?;
    }
    if let Some(away) = &config.away {
        workflow.select_away(away).await?;
    }

    // Failures are already reflected in the state; the card shows them.
    if let Err(e) = workflow.submit().await {
        warn!("Prediction not available: {}", e);
    }

    let state = workflow.snapshot().await;
    if config.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        print!("{}", display::render_state(&state));
    }

    Ok(())
}
