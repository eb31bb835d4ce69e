//! tsd-dash - tweet sentiment dashboard service
//!
//! Loads and scores the dataset once, then serves the dashboard aggregates,
//! the live analyzer and the tone rewriter over HTTP.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tsd_common::config::{self, TomlConfig};
use tsd_common::tone::ToneTables;
use tsd_common::{Dataset, LexiconOracle, SentimentOracle, ToneRewriter};
use tsd_dash::{build_router, AppState};

/// Command-line arguments for tsd-dash
#[derive(Parser, Debug)]
#[command(name = "tsd-dash")]
#[command(about = "Tweet sentiment dashboard service")]
#[command(version)]
struct Args {
    /// Config file (TOML)
    #[arg(short, long, env = "TSD_CONFIG")]
    config: Option<PathBuf>,

    /// Dataset CSV
    #[arg(short, long, env = "TSD_DATASET")]
    dataset: Option<PathBuf>,

    /// Bind address (overrides config)
    #[arg(long, env = "TSD_HOST")]
    host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(short, long, env = "TSD_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Config is read before tracing starts so the configured level applies;
    // a missing file is reported once the subscriber is up.
    let config_path = config::resolve_config_path(args.config.as_deref(), config::CONFIG_ENV);
    let loaded = match &config_path {
        Some(path) => TomlConfig::load_if_exists(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => None,
    };
    let config_found = loaded.is_some();
    let toml_config = loaded.unwrap_or_default();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("tsd_dash={0},tsd_common={0},tower_http={0}", toml_config.logging.level)
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting tsd-dash v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    match (&config_path, config_found) {
        (Some(path), true) => info!("Loaded configuration from {}", path.display()),
        (Some(path), false) => warn!(
            "Config file {} not found, using built-in defaults",
            path.display()
        ),
        (None, _) => warn!("No config directory available, using built-in defaults"),
    }

    let tables = match &toml_config.rewriter.tables_path {
        Some(path) => {
            info!("Loading tone tables from {}", path.display());
            ToneTables::load(path).context("Failed to load tone tables")?
        }
        None => ToneTables::builtin(),
    };

    let dataset_path =
        config::resolve_dataset_path(args.dataset.as_deref(), config::DATASET_ENV, &toml_config);
    info!("Dataset path: {}", dataset_path.display());

    let oracle: Arc<dyn SentimentOracle> = Arc::new(LexiconOracle::new());
    let dataset = Dataset::load(&dataset_path, oracle.as_ref())
        .with_context(|| format!("Failed to load dataset {}", dataset_path.display()))?;

    let state = AppState::new(dataset, oracle, ToneRewriter::with_tables(tables));
    let app = build_router(state);

    let host = args.host.unwrap_or(toml_config.host);
    let port = args.port.unwrap_or(toml_config.port);
    let addr = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("tsd-dash listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
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
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
