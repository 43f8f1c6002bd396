//! Corgi GIF Service
//!
//! Finds corgi GIFs by activity via Giphy and serves them over HTTP.
//!
//! # Configuration
//! Set `GIPHY_API_KEY` and `PORT` env vars or configure in `~/.corgi-gif/config.toml`

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use corgi_gif_service::web::{self, state::AppState};
use corgi_gif_service::{init_tracing, Config, SearchProxy};

#[derive(Parser)]
#[command(name = "corgi-gif-service")]
#[command(about = "Find corgi GIFs by activity via the Giphy search API")]
struct Cli {
    /// Path to a TOML config file (must exist; without it CORGI_GIF_CONFIG_PATH
    /// or ~/.corgi-gif/config.toml is used when present)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Address to bind (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config and PORT)
    #[arg(long, short)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("corgi_gif_service")?;

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let proxy = SearchProxy::from_config(&config)?;
    tracing::info!(
        "Using {} backend at {} (timeout {}s)",
        proxy.backend_name(),
        config.giphy.url,
        config.giphy.timeout_seconds
    );

    web::serve(&config.server, AppState::new(proxy)).await
}
