//! Row scanning
//!
//! A [`SqlRow`] is one decoded result row. Records read it positionally
//! through the [`Scannable`] contract, in the physical column order of the
//! table, never by column name.

use type_mapping::{FromPostgresValue, PostgresValue};

use crate::errors::TableError;

/// One result row: column names and their values, in select order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SqlRow {
    columns: Vec<String>,
    values: Vec<PostgresValue>,
}

impl SqlRow {
    pub fn new(columns: Vec<String>, values: Vec<PostgresValue>) -> Self {
        Self { columns, values }
    }

    /// Row without column names, for sources that only know positions
    pub fn from_values(values: Vec<PostgresValue>) -> Self {
        Self {
            columns: Vec::new(),
            values,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[PostgresValue] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Anything that yields column values in order
pub trait Scannable {
    /// Total number of columns in the source
    fn column_count(&self) -> usize;

    /// Take the next column value
    fn next_value(&mut self) -> Result<PostgresValue, TableError>;

    /// Take the next column value and convert it
    fn scan<T: FromPostgresValue>(&mut self) -> Result<T, TableError> {
        let value = self.next_value()?;
        Ok(T::from_postgres_value(value)?)
    }
}

/// Left-to-right scanner over a [`SqlRow`]
#[derive(Debug)]
pub struct RowScanner {
    values: std::vec::IntoIter<PostgresValue>,
    available: usize,
    scanned: usize,
}

impl RowScanner {
    pub fn new(row: SqlRow) -> Self {
        let available = row.values.len();
        Self {
            values: row.values.into_iter(),
            available,
            scanned: 0,
        }
    }

    /// Fails when the record left columns unread
    pub fn finish(self) -> Result<(), TableError> {
        if self.scanned != self.available {
            return Err(TableError::UnscannedColumns {
                scanned: self.scanned,
                available: self.available,
            });
        }
        Ok(())
    }
}

impl Scannable for RowScanner {
    fn column_count(&self) -> usize {
        self.available
    }

    fn next_value(&mut self) -> Result<PostgresValue, TableError> {
        let value = self.values.next().ok_or(TableError::MissingColumn {
            index: self.scanned,
            available: self.available,
        })?;
        self.scanned += 1;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> SqlRow {
        SqlRow::new(
            vec!["id".into(), "name".into()],
            vec![PostgresValue::Integer(1), PostgresValue::from("Aarhus")],
        )
    }

    #[test]
    fn test_scan_in_order() {
        let mut scanner = RowScanner::new(row());
        assert_eq!(scanner.column_count(), 2);
        let id: i64 = scanner.scan().unwrap();
        let name: String = scanner.scan().unwrap();
        assert_eq!((id, name.as_str()), (1, "Aarhus"));
        assert!(scanner.finish().is_ok());
    }

    #[test]
    fn test_scan_past_last_column() {
        let mut scanner = RowScanner::new(row());
        let _: i64 = scanner.scan().unwrap();
        let _: String = scanner.scan().unwrap();
        let err = scanner.scan::<i64>().unwrap_err();
        assert!(matches!(
            err,
            TableError::MissingColumn {
                index: 2,
                available: 2
            }
        ));
    }

    #[test]
    fn test_unread_columns_fail_finish() {
        let mut scanner = RowScanner::new(row());
        let _: i64 = scanner.scan().unwrap();
        assert!(matches!(
            scanner.finish(),
            Err(TableError::UnscannedColumns {
                scanned: 1,
                available: 2
            })
        ));
    }

    #[test]
    fn test_type_mismatch_is_conversion_error() {
        let mut scanner = RowScanner::new(row());
        let err = scanner.scan::<String>().unwrap_err();
        assert!(matches!(err, TableError::Conversion(_)));
    }
}
