//! Ten-pin bowling score service binary.

use anyhow::Result;
use clap::Parser;
use tenpin_server::{ServerConfig, app};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line options; anything not given falls back to the
/// environment and then to defaults.
#[derive(Debug, Parser)]
#[command(name = "tenpin_server", about = "Ten-pin bowling score REST service")]
struct Cli {
    /// Address to bind.
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = ServerConfig::from_env();
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    info!(host = %config.host, port = config.port, "Starting bowling score server");

    let app = app(&config);
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!("Server ready at http://{}:{}/", config.host, config.port);
    info!("Routes: POST /api/game/start, POST /api/game/{{id}}/frame/{{n}}/scores, GET /api/game/{{id}}/scoreboard");

    axum::serve(listener, app).await?;

    Ok(())
}
