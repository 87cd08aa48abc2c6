//! meeple-export - board-game dataset chunk exporter
//!
//! Connects to the configured MySQL database, pages the board-game result
//! set into JSON chunk files and writes the chunk-count manifest. Takes no
//! arguments; configuration comes from the environment.

mod config;

use std::sync::Arc;

use anyhow::Context;
use meeple_core::Connection;
use meeple_driver_mysql::MySqlConnection;
use meeple_export::{ChunkExporter, ExportOptions};
use tracing_subscriber::EnvFilter;

use crate::config::ExportConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up database credentials from a .env file when present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "starting board-game chunk export"
    );

    let config = ExportConfig::from_env().context("failed to read export configuration")?;

    let connection = MySqlConnection::connect(
        &config.host,
        config.port,
        &config.database,
        &config.user,
        &config.password,
    )
    .await
    .context("failed to connect to the database")?;
    let connection: Arc<dyn Connection> = Arc::new(connection);

    let exporter = ChunkExporter::new(connection.clone(), ExportOptions::default());
    let summary = exporter.export().await.context("export failed")?;

    connection
        .close()
        .await
        .context("failed to close the database connection")?;

    tracing::info!(
        total_chunks = summary.total_chunks,
        rows_exported = summary.rows_exported,
        "data successfully split into chunk files"
    );
    Ok(())
}
