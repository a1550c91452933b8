//! Syndicate server binary.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use syndicate_core::Hooks;
use syndicate_feed::{HttpFeed, MenuFeed};
use syndicate_server::{AppState, MenuService, Settings, metrics::init_metrics, run_server};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "syndicate-server", version, about = "Dining menu syndication server")]
struct Cli {
    /// Path to a TOML settings file.
    #[arg(short, long, env = "SYNDICATE_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::load(cli.config.as_deref())?;
    let addr = settings.addr()?;

    tracing::info!(
        "Starting Syndicate Server v{}",
        env!("CARGO_PKG_VERSION")
    );
    tracing::info!("Default feed host: {}", settings.feed.default_host);
    tracing::info!("Feed path: {}", settings.feed.feed_path);

    let prometheus_handle = init_metrics()?;

    let feed: Arc<dyn MenuFeed> = Arc::new(HttpFeed::new(settings.feed_config())?);
    let service = MenuService::from_settings(&settings, feed, Hooks::new())?;

    tracing::info!("Feed client initialized");

    run_server(addr, AppState::new(service), prometheus_handle).await?;

    Ok(())
}
