//! Café Fausse API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p fausse-api
//! ```
//!
//! Configuration is loaded from environment variables and an optional `.env`.

use fausse_common::{init_tracing, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    let tracing_config = TracingConfig::for_environment(config.app.env, config.app.log_format);
    if let Err(e) = init_tracing(&tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        address = %config.api.address(),
        "Starting Café Fausse API server"
    );

    fausse_api::run(config).await?;

    info!("Server stopped");
    Ok(())
}
