use crate::errors::TableError;
use crate::scan::Scannable;
use type_mapping::FieldMap;

/// A type that can be written to and read back from a table.
///
/// ```ignore
/// impl Record for Office {
///     fn from_row<S: Scannable>(row: &mut S) -> Result<Self, TableError> {
///         Ok(Self {
///             id: row.scan()?,
///             name: row.scan()?,
///             capacity: row.scan()?,
///         })
///     }
///
///     fn to_fields(&self) -> Result<FieldMap, TableError> {
///         Ok(fields! { "name" => self.name.as_str(), "capacity" => self.capacity })
///     }
/// }
/// ```
pub trait Record: Sized + Send + Sync {
    /// Build a record from a row, reading columns in the table's physical
    /// order (the order `SELECT *` returns them).
    fn from_row<S: Scannable>(row: &mut S) -> Result<Self, TableError>;

    /// Produce the write-set for an insert.
    ///
    /// May reject the record with [`TableError::Validation`]; the write is
    /// then aborted before any SQL is sent. Storage-generated columns such
    /// as a serial id are left out.
    fn to_fields(&self) -> Result<FieldMap, TableError>;
}
