//! Traits for database operations
//!
//! This module contains the contracts between storable types, tables and
//! the connection they run on.

pub mod record;
pub mod table;
pub mod table_schema;

pub use record::Record;
pub use table::Table;
pub use table_schema::TableSchema;
