use std::fmt;

use thiserror::Error;
use type_mapping::ConversionError;

use crate::validation::IdentifierError;

#[derive(Error, Debug)]
pub enum TableError {
    /// Driver error, passed through untouched
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Insert into '{table}' affected 0 rows")]
    NoRowsAffected { table: String },

    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    #[error("Row has no column at index {index} ({available} columns available)")]
    MissingColumn { index: usize, available: usize },

    #[error("Record scanned {scanned} of {available} columns")]
    UnscannedColumns { scanned: usize, available: usize },

    #[error("Column '{column}' has unsupported type {type_name}")]
    UnsupportedColumnType { column: String, type_name: String },

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(#[from] IdentifierError),
}

impl TableError {
    /// Create a validation error for a record rejecting its own fields
    pub fn validation(message: impl Into<String>) -> Self {
        TableError::Validation(message.into())
    }

    /// True when the driver found no row for a single-row query
    pub fn is_row_not_found(&self) -> bool {
        matches!(self, TableError::Database(sqlx::Error::RowNotFound))
    }
}

/// Failure of a multi-row select, carrying the records decoded before it
pub struct PartialSelect<T> {
    pub decoded: Vec<T>,
    pub error: TableError,
}

impl<T> PartialSelect<T> {
    /// Failure before any row was decoded
    pub fn empty(error: impl Into<TableError>) -> Self {
        Self {
            decoded: Vec::new(),
            error: error.into(),
        }
    }

    pub fn into_parts(self) -> (Vec<T>, TableError) {
        (self.decoded, self.error)
    }
}

impl<T> fmt::Debug for PartialSelect<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartialSelect")
            .field("decoded", &self.decoded.len())
            .field("error", &self.error)
            .finish()
    }
}

impl<T> fmt::Display for PartialSelect<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "select stopped after {} decoded records: {}",
            self.decoded.len(),
            self.error
        )
    }
}

impl<T> std::error::Error for PartialSelect<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl<T> From<PartialSelect<T>> for TableError {
    fn from(partial: PartialSelect<T>) -> Self {
        partial.error
    }
}
