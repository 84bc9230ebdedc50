//! Table trait implementation for PostgresTable

use async_trait::async_trait;
use type_mapping::FieldMap;

use super::core::PostgresTable;
use crate::connection::QueryOutcome;
use crate::errors::{PartialSelect, TableError};
use crate::query_builder::SqlGenerator;
use crate::traits::{Record, Table};
use crate::{debug_log, trace_log};

#[async_trait]
impl<T: Record> Table<T> for PostgresTable<T> {
    fn table_name(&self) -> &str {
        self.table.as_str()
    }

    async fn select_first(&self, filter: Option<&FieldMap>) -> Result<T, TableError> {
        let statement = SqlGenerator::select(&self.table, filter)?;
        debug_log!("[SELECT_FIRST] {}", statement.sql);

        let row = self
            .connection
            .query_one(&statement.sql, &statement.args)
            .await?;

        Self::decode(row)
    }

    async fn select_all(&self, filter: Option<&FieldMap>) -> Result<Vec<T>, PartialSelect<T>> {
        let statement = SqlGenerator::select(&self.table, filter).map_err(PartialSelect::empty)?;
        debug_log!("[SELECT_ALL] {}", statement.sql);

        let rows = self
            .connection
            .query_many(&statement.sql, &statement.args)
            .await
            .map_err(PartialSelect::empty)?;
        trace_log!("[SELECT_ALL] {} rows from {}", rows.len(), self.table);

        let mut decoded = Vec::with_capacity(rows.len());
        for row in rows {
            match Self::decode(row) {
                Ok(record) => decoded.push(record),
                Err(error) => return Err(PartialSelect { decoded, error }),
            }
        }

        Ok(decoded)
    }

    async fn insert(&self, item: &T) -> Result<(), TableError> {
        let fields = item.to_fields()?;
        let statement = SqlGenerator::insert(&self.table, &fields)?;
        debug_log!("[INSERT] {}", statement.sql);

        let outcome = self
            .connection
            .execute(&statement.sql, &statement.args)
            .await?;

        if outcome.rows_affected == 0 {
            return Err(TableError::NoRowsAffected {
                table: self.table.to_string(),
            });
        }

        Ok(())
    }

    async fn update(
        &self,
        set: &FieldMap,
        filter: Option<&FieldMap>,
    ) -> Result<QueryOutcome, TableError> {
        let statement = SqlGenerator::update(&self.table, set, filter)?;
        debug_log!("[UPDATE] {}", statement.sql);

        let outcome = self
            .connection
            .execute(&statement.sql, &statement.args)
            .await?;
        trace_log!("[UPDATE] {} rows affected", outcome.rows_affected);

        Ok(outcome)
    }

    async fn delete(&self, filter: Option<&FieldMap>) -> Result<QueryOutcome, TableError> {
        let statement = SqlGenerator::delete(&self.table, filter)?;
        debug_log!("[DELETE] {}", statement.sql);

        let outcome = self
            .connection
            .execute(&statement.sql, &statement.args)
            .await?;
        trace_log!("[DELETE] {} rows affected", outcome.rows_affected);

        Ok(outcome)
    }
}
