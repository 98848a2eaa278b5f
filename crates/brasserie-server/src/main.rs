//! brasserie server binary.
//!
//! Reads configuration (see [`brasserie_server::config`]), opens the SQLite
//! store, and serves the JSON API over HTTP.
//!
//! # Schema setup
//!
//! Opening the store creates any missing tables. To do only that and exit:
//!
//! ```sh
//! cargo run -p brasserie-server -- --init-only
//! ```

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use brasserie_server::ServerConfig;
use brasserie_store_sqlite::SqliteStore;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Brasserie back-office API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Create the database schema and exit.
  #[arg(long)]
  init_only: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let env: config::Map<String, String> = std::env::vars().collect();
  let server_cfg = ServerConfig::load(Some(cli.config.as_path()), &env)
    .context("failed to load configuration")?;

  let store = SqliteStore::open(&server_cfg.database_path)
    .await
    .with_context(|| format!("failed to open store at {:?}", server_cfg.database_path))?;

  if cli.init_only {
    tracing::info!(path = ?server_cfg.database_path, "schema ready");
    store.close().await.context("failed to close store")?;
    return Ok(());
  }

  let app = brasserie_server::app(Arc::new(store.clone()));
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  store.close().await.context("failed to close store")?;
  Ok(())
}

/// Resolve on Ctrl-C so in-flight requests can finish.
async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    tracing::warn!(error = %e, "failed to listen for shutdown signal");
    std::future::pending::<()>().await;
  }
  tracing::info!("shutting down");
}
