use async_trait::async_trait;
use type_mapping::FieldMap;

use crate::connection::QueryOutcome;
use crate::errors::{PartialSelect, TableError};
use crate::traits::record::Record;

/// Basic CRUD over one table.
///
/// Filters are column/value equalities joined with `AND`. `None` and an
/// empty map both mean "no filter": the operation applies to every row.
#[async_trait]
pub trait Table<T: Record> {
    /// The table name in the database
    fn table_name(&self) -> &str;

    /// First row matching the filter. No match surfaces the driver's
    /// row-not-found error.
    async fn select_first(&self, filter: Option<&FieldMap>) -> Result<T, TableError>;

    /// All rows matching the filter; empty when nothing matches
    async fn select_all(&self, filter: Option<&FieldMap>) -> Result<Vec<T>, PartialSelect<T>>;

    /// Insert the record's fields. Zero affected rows is an error.
    async fn insert(&self, item: &T) -> Result<(), TableError>;

    /// Set the given columns on all rows matching the filter
    async fn update(
        &self,
        set: &FieldMap,
        filter: Option<&FieldMap>,
    ) -> Result<QueryOutcome, TableError>;

    /// Delete all rows matching the filter
    async fn delete(&self, filter: Option<&FieldMap>) -> Result<QueryOutcome, TableError>;
}
