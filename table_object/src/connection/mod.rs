//! Connection abstraction
//!
//! A [`Connection`] runs parameterized statements and hands rows back as
//! [`SqlRow`]s. [`PostgresConnection`] talks to PostgreSQL through a sqlx
//! pool; [`HookedConnection`] wraps any connection with pre/post hooks.

pub mod hooked;
pub mod postgres;

pub use hooked::HookedConnection;
pub use postgres::PostgresConnection;

use async_trait::async_trait;
use type_mapping::PostgresValue;

use crate::errors::TableError;
use crate::scan::SqlRow;

/// Summary of a statement that returns no rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueryOutcome {
    pub rows_affected: u64,
}

impl QueryOutcome {
    pub fn new(rows_affected: u64) -> Self {
        Self { rows_affected }
    }
}

/// Simple SQL connection.
///
/// Arguments bind positionally to `$1`, `$2`, ... in `sql`. Driver errors
/// come back as [`TableError::Database`] without translation.
#[async_trait]
pub trait Connection: Send + Sync {
    /// Run a query and return its first row
    async fn query_one(&self, sql: &str, args: &[PostgresValue]) -> Result<SqlRow, TableError>;

    /// Run a query and return all rows
    async fn query_many(&self, sql: &str, args: &[PostgresValue])
        -> Result<Vec<SqlRow>, TableError>;

    /// Run a statement and report how many rows it touched
    async fn execute(&self, sql: &str, args: &[PostgresValue]) -> Result<QueryOutcome, TableError>;
}
