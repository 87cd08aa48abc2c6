//! Paginated JSON export of the board-game dataset
//!
//! This crate turns the rows of the `board_game` table (joined with its
//! rank and the concatenated category/mechanic/publisher lists) into a
//! directory of fixed-size JSON chunk files plus a manifest recording how
//! many chunks were written:
//!
//! ```text
//! MySQL → page query (LIMIT/OFFSET) → default substitution → chunk files
//!                                                          → chunk_count.json
//! ```
//!
//! The chunk files are consumed by a static site that fetches the manifest
//! first and then loads `chunks/board_games_chunk_<n>.json` one by one.

mod defaults;
mod encode;
mod exporter;
pub mod query;

pub use defaults::{default_for_column, normalize_row};
pub use encode::{encode_row, encode_value};
pub use exporter::{
    ChunkExporter, ChunkManifest, ExportError, ExportOptions, ExportSummary, chunk_file_name,
};
