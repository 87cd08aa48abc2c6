//! Connection trait

use crate::{QueryResult, Result};
use async_trait::async_trait;

/// A read-only database connection.
///
/// The export pipeline only ever issues SELECT statements, so the seam
/// between the exporter and the concrete driver is a single query method.
/// Implementations are also the test seam: the exporter tests drive an
/// in-memory implementation through the full pagination path.
#[async_trait]
pub trait Connection: Send + Sync {
    /// Get the driver name (e.g., "mysql")
    fn driver_name(&self) -> &str;

    /// Execute a query that returns rows (SELECT)
    async fn query(&self, sql: &str) -> Result<QueryResult>;

    /// Close the connection and release its resources
    async fn close(&self) -> Result<()>;
}
