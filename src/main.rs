//! Countydash Server
//!
//! Run with: cargo run --bin countydash
//!
//! # Configuration
//!
//! Flags beat environment variables beat the config file:
//! - `--config`: Explicit config file path
//! - `--data`: CSV path (or `COUNTYDASH_DATA_PATH`)
//! - `--host` / `--port`: Bind address (or `COUNTYDASH_API_HOST` / `COUNTYDASH_API_PORT`)
//! - `RUST_LOG`: Log filter (default: countydash=info,tower_http=debug)

use clap::Parser;
use countydash::api::{serve, ApiConfig, AppState};
use countydash::config::Config;
use countydash::dataset::load_dataset;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "countydash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "County-level COVID-19 dashboard served over loopback HTTP")]
struct Args {
    /// Config file path (default: search standard locations)
    #[arg(long)]
    config: Option<PathBuf>,

    /// CSV path (overrides config)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Host to bind (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration before logging init so the format setting applies
    let config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    init_tracing(&config);

    tracing::info!("Countydash v{}", env!("CARGO_PKG_VERSION"));

    // Resolve startup parameters: flags beat env beats file
    let data_path = args
        .data
        .unwrap_or_else(|| PathBuf::from(&config.data.csv_path));

    let api_config = ApiConfig {
        host: args.host.unwrap_or_else(|| config.api.host.clone()),
        port: args.port.unwrap_or(config.api.port),
        request_timeout_ms: config.api.request_timeout_secs * 1000,
    };

    // Load the dataset; any failure here is fatal
    tracing::info!("Loading dataset from {:?}", data_path);
    let dataset = Arc::new(load_dataset(&data_path)?);
    tracing::info!("Loaded {} records", dataset.len());

    let state = AppState::new(
        Arc::clone(&dataset),
        api_config.clone(),
        data_path.to_string_lossy().to_string(),
    );

    serve(state, &api_config).await?;

    tracing::info!("Countydash stopped");
    Ok(())
}

/// Initialize tracing from the logging config
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("countydash={},tower_http=debug", config.logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
