//! Convenience re-exports for common table-object usage

// Core traits
pub use crate::traits::{Record, Table, TableSchema};

// Connections
pub use crate::connection::{Connection, HookedConnection, PostgresConnection, QueryOutcome};

// Error types
pub use crate::errors::{PartialSelect, TableError};

// Generic table
pub use crate::generic_table::PostgresTable;

// Row scanning
pub use crate::scan::{Scannable, SqlRow};

// Values and field mappings
pub use type_mapping::{fields, FieldMap, FromPostgresValue, NullKind, PostgresValue};

// Common external dependencies that are frequently used
pub use async_trait::async_trait;
pub use sqlx::PgPool;
