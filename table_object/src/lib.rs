//! Table Object - Core data-mapping layer for Tablehaus
//!
//! This crate provides the connection abstraction, the scan and record
//! contracts, SQL statement generation and the generic table accessor.

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod connection;
pub mod errors;
pub mod generic_table;
pub mod prelude;
pub mod query_builder;
pub mod scan;
pub mod traits;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;

pub use connection::{Connection, HookedConnection, PostgresConnection, QueryOutcome};
pub use errors::{PartialSelect, TableError};
pub use generic_table::PostgresTable;
pub use query_builder::{SqlGenerator, Statement};
pub use scan::{RowScanner, Scannable, SqlRow};
pub use traits::*;
pub use validation::{IdentifierError, ValidatedFieldName, ValidatedTableName};

pub use type_mapping::{fields, FieldMap, FromPostgresValue, NullKind, PostgresValue};
