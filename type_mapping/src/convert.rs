//! Conversions out of PostgresValue
//!
//! Scanned columns arrive as [`PostgresValue`]s; records pull typed Rust
//! values back out through [`FromPostgresValue`].

use crate::types::PostgresValue;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("cannot convert a {found} value into {expected}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("unexpected NULL for non-nullable {expected}")]
    UnexpectedNull { expected: &'static str },
}

impl ConversionError {
    fn mismatch(expected: &'static str, found: &PostgresValue) -> Self {
        match found {
            PostgresValue::Null(_) => ConversionError::UnexpectedNull { expected },
            other => ConversionError::TypeMismatch {
                expected,
                found: other.type_name(),
            },
        }
    }
}

/// Fallible conversion from a scanned column value
pub trait FromPostgresValue: Sized {
    fn from_postgres_value(value: PostgresValue) -> Result<Self, ConversionError>;
}

impl FromPostgresValue for PostgresValue {
    fn from_postgres_value(value: PostgresValue) -> Result<Self, ConversionError> {
        Ok(value)
    }
}

impl FromPostgresValue for String {
    fn from_postgres_value(value: PostgresValue) -> Result<Self, ConversionError> {
        match value {
            PostgresValue::Text(s) => Ok(s),
            other => Err(ConversionError::mismatch("String", &other)),
        }
    }
}

// Integers only widen: a serial (INT4) column scans into i64, never the other way round.
impl FromPostgresValue for i16 {
    fn from_postgres_value(value: PostgresValue) -> Result<Self, ConversionError> {
        match value {
            PostgresValue::SmallInt(v) => Ok(v),
            other => Err(ConversionError::mismatch("i16", &other)),
        }
    }
}

impl FromPostgresValue for i32 {
    fn from_postgres_value(value: PostgresValue) -> Result<Self, ConversionError> {
        match value {
            PostgresValue::SmallInt(v) => Ok(i32::from(v)),
            PostgresValue::Integer(v) => Ok(v),
            other => Err(ConversionError::mismatch("i32", &other)),
        }
    }
}

impl FromPostgresValue for i64 {
    fn from_postgres_value(value: PostgresValue) -> Result<Self, ConversionError> {
        match value {
            PostgresValue::SmallInt(v) => Ok(i64::from(v)),
            PostgresValue::Integer(v) => Ok(i64::from(v)),
            PostgresValue::BigInt(v) => Ok(v),
            other => Err(ConversionError::mismatch("i64", &other)),
        }
    }
}

impl FromPostgresValue for f64 {
    fn from_postgres_value(value: PostgresValue) -> Result<Self, ConversionError> {
        match value {
            PostgresValue::Float(v) => Ok(v),
            other => Err(ConversionError::mismatch("f64", &other)),
        }
    }
}

impl FromPostgresValue for bool {
    fn from_postgres_value(value: PostgresValue) -> Result<Self, ConversionError> {
        match value {
            PostgresValue::Boolean(v) => Ok(v),
            other => Err(ConversionError::mismatch("bool", &other)),
        }
    }
}

impl FromPostgresValue for Uuid {
    fn from_postgres_value(value: PostgresValue) -> Result<Self, ConversionError> {
        match value {
            PostgresValue::Uuid(v) => Ok(v),
            other => Err(ConversionError::mismatch("Uuid", &other)),
        }
    }
}

impl FromPostgresValue for chrono::DateTime<chrono::Utc> {
    fn from_postgres_value(value: PostgresValue) -> Result<Self, ConversionError> {
        match value {
            PostgresValue::Timestamp(v) => Ok(v),
            other => Err(ConversionError::mismatch("DateTime<Utc>", &other)),
        }
    }
}

impl FromPostgresValue for serde_json::Value {
    fn from_postgres_value(value: PostgresValue) -> Result<Self, ConversionError> {
        match value {
            PostgresValue::Json(v) => Ok(v),
            other => Err(ConversionError::mismatch("serde_json::Value", &other)),
        }
    }
}

impl FromPostgresValue for Vec<u8> {
    fn from_postgres_value(value: PostgresValue) -> Result<Self, ConversionError> {
        match value {
            PostgresValue::Bytes(v) => Ok(v),
            other => Err(ConversionError::mismatch("Vec<u8>", &other)),
        }
    }
}

impl<T: FromPostgresValue> FromPostgresValue for Option<T> {
    fn from_postgres_value(value: PostgresValue) -> Result<Self, ConversionError> {
        match value {
            PostgresValue::Null(_) => Ok(None),
            other => T::from_postgres_value(other).map(Some),
        }
    }
}
