//! MySQL driver for the meeple exporter
//!
//! Implements the `meeple_core::Connection` trait over `mysql_async`.

mod connection;

pub use connection::MySqlConnection;
