//! The chunked export pipeline.
//!
//! One linear procedure: clear the output directory, count the rows, fetch
//! pages of `chunk_size` rows ordered by rank until a page comes back
//! empty, normalize and write each page as a numbered JSON file, then
//! record the chunk count in the manifest.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use meeple_core::{Connection, MeepleError, Value};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::defaults::normalize_row;
use crate::encode::encode_row;
use crate::query;

/// Errors during export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Query error: {0}")]
    QueryError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Encoding error: {0}")]
    EncodingError(#[from] serde_json::Error),

    #[error("Count query returned no rows")]
    MissingCount,
}

impl From<MeepleError> for ExportError {
    fn from(e: MeepleError) -> Self {
        ExportError::QueryError(e.to_string())
    }
}

/// Options for the chunk export
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Directory receiving the chunk files; removed and recreated at start
    pub output_dir: PathBuf,
    /// Manifest path, written beside (not inside) the chunk directory
    pub manifest_path: PathBuf,
    /// Rows per chunk file
    pub chunk_size: u64,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("chunks"),
            manifest_path: PathBuf::from("chunk_count.json"),
            chunk_size: 1000,
        }
    }
}

impl ExportOptions {
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_manifest_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest_path = path.into();
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: u64) -> Self {
        self.chunk_size = chunk_size;
        self
    }
}

/// Manifest recording how many chunk files a run produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkManifest {
    pub total_chunks: usize,
}

/// Summary of a completed export
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Row count reported by the database before the page loop
    pub total_rows: u64,
    /// Rows actually written across all chunks
    pub rows_exported: u64,
    /// Number of chunk files produced
    pub total_chunks: usize,
    /// Paths of the chunk files, in write order
    pub files: Vec<PathBuf>,
}

/// File name for the 1-based chunk number
pub fn chunk_file_name(chunk_number: usize) -> String {
    format!("board_games_chunk_{}.json", chunk_number)
}

/// Exports the board-game table into paginated JSON chunk files
pub struct ChunkExporter {
    connection: Arc<dyn Connection>,
    options: ExportOptions,
}

impl ChunkExporter {
    /// Create a new exporter over an established connection
    pub fn new(connection: Arc<dyn Connection>, options: ExportOptions) -> Self {
        Self {
            connection,
            options,
        }
    }

    /// Execute the export
    pub async fn export(&self) -> Result<ExportSummary, ExportError> {
        self.reset_output_dir()?;

        let total_rows = self.fetch_total_rows().await?;
        tracing::info!(
            total_rows = total_rows,
            chunk_size = self.options.chunk_size,
            output_dir = %self.options.output_dir.display(),
            "starting board-game export"
        );

        let mut files = Vec::new();
        let mut rows_exported: u64 = 0;
        let mut offset: u64 = 0;
        let mut chunk_number: usize = 1;

        loop {
            let sql = query::page_sql(self.options.chunk_size, offset);
            let mut result = self.connection.query(&sql).await?;

            if result.rows.is_empty() {
                break;
            }

            for row in &mut result.rows {
                normalize_row(row);
            }

            let records: Vec<JsonValue> = result.rows.iter().map(encode_row).collect();
            let path = self.options.output_dir.join(chunk_file_name(chunk_number));
            write_pretty_json(&path, &JsonValue::Array(records))?;

            rows_exported += result.rows.len() as u64;
            tracing::info!(
                chunk = chunk_number,
                rows = result.rows.len(),
                rows_exported = rows_exported,
                total_rows = total_rows,
                "wrote chunk file"
            );

            files.push(path);
            chunk_number += 1;
            offset += self.options.chunk_size;
        }

        let total_chunks = chunk_number - 1;
        let manifest = ChunkManifest { total_chunks };
        write_manifest(&self.options.manifest_path, &manifest)?;

        tracing::info!(
            total_chunks = total_chunks,
            rows_exported = rows_exported,
            manifest = %self.options.manifest_path.display(),
            "export complete"
        );

        Ok(ExportSummary {
            total_rows,
            rows_exported,
            total_chunks,
            files,
        })
    }

    /// Remove any prior run's output and recreate the chunk directory
    fn reset_output_dir(&self) -> Result<(), ExportError> {
        let dir = &self.options.output_dir;
        if dir.exists() {
            tracing::debug!(dir = %dir.display(), "clearing previous chunk directory");
            std::fs::remove_dir_all(dir)?;
        }
        std::fs::create_dir_all(dir)?;
        Ok(())
    }

    async fn fetch_total_rows(&self) -> Result<u64, ExportError> {
        let result = self.connection.query(query::COUNT_SQL).await?;
        result
            .rows
            .first()
            .and_then(|row| row.get(0))
            .and_then(Value::as_i64)
            .map(|count| count as u64)
            .ok_or(ExportError::MissingCount)
    }
}

fn write_pretty_json(path: &Path, value: &JsonValue) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}

fn write_manifest(path: &Path, manifest: &ChunkManifest) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, manifest)?;
    writer.flush()?;
    Ok(())
}
