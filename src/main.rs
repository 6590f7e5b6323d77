//! Media Object Gateway
//!
//! A request-path gateway in front of object storage, built with Tokio and
//! Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌────────────────────────────────────────────────┐
//!                     │                 MEDIA GATEWAY                   │
//!                     │                                                 │
//!   Client Request    │  ┌──────────┐   ┌───────────┐   ┌───────────┐  │
//!   ──────────────────┼─▶│  http    │──▶│ security  │──▶│  cache    │  │
//!                     │  │ server   │   │ rate limit│   │ decision  │  │
//!                     │  └──────────┘   └───────────┘   └─────┬─────┘  │
//!                     │                                        │        │
//!                     │                        NotModified ◀───┤        │
//!   Client Response   │  ┌──────────┐   ┌───────────┐         ▼        │
//!   ◀─────────────────┼──│ response │◀──│  storage  │◀───── Serve ─────┼──── S3
//!                     │  │ headers  │   │  fetch    │                   │
//!                     │  └──────────┘   └───────────┘                   │
//!                     │                                                 │
//!                     │  ┌───────────────────────────────────────────┐  │
//!                     │  │         Cross-Cutting Concerns            │  │
//!                     │  │  ┌────────┐ ┌──────────────┐ ┌─────────┐  │  │
//!                     │  │  │ config │ │observability │ │  CORS   │  │  │
//!                     │  │  └────────┘ └──────────────┘ └─────────┘  │  │
//!                     │  └───────────────────────────────────────────┘  │
//!                     └────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use media_gateway::config::loader::load_config;
use media_gateway::observability::{logging, metrics};
use media_gateway::storage::S3Store;
use media_gateway::{GatewayConfig, HttpServer};

#[derive(Parser, Debug)]
#[command(
    name = "media-gateway",
    about = "Conditional-cache gateway for immutable media objects"
)]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "gateway.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Missing file falls back to defaults; a present but invalid file is fatal
    let config = if args.config.exists() {
        load_config(&args.config)?
    } else {
        GatewayConfig::default()
    };

    logging::init(&config.observability.log_level);

    tracing::info!("media-gateway v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        throttled_routes = config.rate_limit.routes.len(),
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let store = Arc::new(S3Store::connect(&config.storage).await);
    let server = HttpServer::new(config, store)?;
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
