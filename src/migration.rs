//! Database migration functionality
//!
//! This module provides table creation for types that own their DDL
//! through [`TableSchema`]. Schema changes beyond create/drop are out of
//! scope.

use crate::core::Tablehaus;
use crate::errors::TablehausError;
use table_object::TableSchema;

impl Tablehaus {
    /// Create the table for a model
    /// If recreate is true, drops existing table first
    pub async fn auto_migrate<T: TableSchema>(&self, recreate: bool) -> Result<(), TablehausError> {
        if recreate {
            let drop_sql = T::drop_table_sql();
            tracing::info!(table = T::table_name(), "dropping table");
            self.execute(&drop_sql).await?;
        }

        let create_table_sql = T::create_table_sql();
        tracing::info!(table = T::table_name(), "creating table");
        self.execute(&create_table_sql).await?;

        Ok(())
    }

    /// Drop the table for a model if it exists
    pub async fn drop_table<T: TableSchema>(&self) -> Result<(), TablehausError> {
        self.execute(&T::drop_table_sql()).await?;
        Ok(())
    }
}
