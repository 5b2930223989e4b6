//! pangsent Server
//!
//! Serves Pangasinan/English feedback sentiment over HTTP.

use anyhow::Result;
use clap::Parser;
use metrics_exporter_prometheus::PrometheusHandle;
use pangsent_server::{create_router, AppState, ConfigOverrides, ServerConfig};
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(name = "pangsent-server")]
#[command(about = "Pangasinan/English feedback sentiment API", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "pangsent.yaml", env = "PANGSENT_CONFIG")]
    config: String,

    /// Listen address
    #[arg(short = 'l', long)]
    listen: Option<String>,

    /// Listen port
    #[arg(short = 'P', long)]
    port: Option<u16>,

    /// Disable the translator and the remote model
    #[arg(long)]
    offline: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    info!("Starting pangsent server");

    let overrides = ConfigOverrides {
        listen: cli.listen.clone(),
        port: cli.port,
        offline: cli.offline,
    };
    let config = ServerConfig::load(&cli.config, &overrides)?;
    info!("Configuration loaded from {}", cli.config);

    let metrics_handle = init_metrics()?;

    let addr: SocketAddr = config.bind_address().parse()?;
    let state = AppState::new(config, metrics_handle)?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    let shutdown = async {
        shutdown_signal().await;
        warn!("Shutdown signal received, stopping server...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Listen for shutdown signals (SIGTERM, SIGINT)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Initialize tracing/logging
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("pangsent=debug,tower_http=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pangsent=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Initialize metrics exporter and return handle for rendering
fn init_metrics() -> Result<PrometheusHandle> {
    use metrics_exporter_prometheus::PrometheusBuilder;

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics: {}", e))?;

    metrics::describe_counter!(
        "pangsent_requests_total",
        "Total number of analysis requests"
    );
    metrics::describe_counter!(
        "pangsent_decisions_total",
        "Resolved labels by source and sentiment"
    );
    metrics::describe_histogram!(
        "pangsent_resolve_latency_us",
        metrics::Unit::Microseconds,
        "Resolution latency in microseconds"
    );
    metrics::describe_counter!("pangsent_errors_total", "Total number of errors by type");

    info!("Metrics exporter initialized");
    Ok(handle)
}
