use std::marker::PhantomData;
use std::sync::Arc;

use crate::connection::Connection;
use crate::errors::TableError;
use crate::scan::{RowScanner, SqlRow};
use crate::traits::Record;
use crate::validation::ValidatedTableName;

/// Generic table accessor building SQL for any [`Record`] type.
///
/// Holds nothing but the table name and the connection; every call is one
/// round trip.
pub struct PostgresTable<T: Record> {
    pub(crate) table: ValidatedTableName,
    pub(crate) connection: Arc<dyn Connection>,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T: Record> Clone for PostgresTable<T> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
            connection: self.connection.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T: Record> std::fmt::Debug for PostgresTable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresTable")
            .field("table", &self.table.as_str())
            .finish()
    }
}

impl<T: Record> PostgresTable<T> {
    /// Bind a table name to a connection. Fails on a name that is not a
    /// plain SQL identifier.
    pub fn new(table_name: &str, connection: Arc<dyn Connection>) -> Result<Self, TableError> {
        Ok(Self {
            table: ValidatedTableName::new(table_name)?,
            connection,
            _phantom: PhantomData,
        })
    }

    /// Get the connection this table runs on
    pub fn connection(&self) -> &Arc<dyn Connection> {
        &self.connection
    }

    pub(crate) fn decode(row: SqlRow) -> Result<T, TableError> {
        let mut scanner = RowScanner::new(row);
        let record = T::from_row(&mut scanner)?;
        scanner.finish()?;
        Ok(record)
    }
}
