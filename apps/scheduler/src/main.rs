use anyhow::Context;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use appointment_cell::SchedulingRun;
use shared_config::AppConfig;
use shared_scheduling_api::SchedulingApiClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting appointment scheduler");

    let config = AppConfig::from_env();
    let client = SchedulingApiClient::new(&config)
        .context("failed to create scheduling API client")?;

    let outcome = SchedulingRun::from_config(&client, &config)
        .execute()
        .await
        .context("scheduling run aborted")?;

    println!("All appointment requests have been processed.");
    println!("{}", outcome.summary);
    Ok(())
}
