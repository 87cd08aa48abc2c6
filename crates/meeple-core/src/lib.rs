//! Meeple Core - Shared abstractions for the board-game dataset exporter
//!
//! This crate provides the types that the driver and export crates depend
//! on. It defines:
//!
//! - `Connection` - Trait for read-only database connections
//! - `Value`, `Row`, `QueryResult` - Query result representation
//! - `MeepleError` / `Result` - Common error taxonomy

mod connection;
mod error;
mod types;

pub use connection::*;
pub use error::*;
pub use types::*;
