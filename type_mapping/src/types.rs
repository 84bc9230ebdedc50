//! Type mapping definitions
//!
//! This module provides the runtime value type exchanged with PostgreSQL
//! and the conversions from plain Rust values into it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// PostgreSQL value used for bound arguments, field mappings and scanned columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PostgresValue {
    Text(String),
    SmallInt(i16),
    Integer(i32),
    BigInt(i64),
    Float(f64),
    Boolean(bool),
    Uuid(Uuid),
    Timestamp(chrono::DateTime<chrono::Utc>),
    Json(serde_json::Value),
    Bytes(Vec<u8>),
    /// NULL, still carrying the column type it stands in for
    Null(NullKind),
}

/// Declared type of a NULL.
///
/// PostgreSQL types every bound parameter, so a NULL written into a BIGINT
/// column has to go out as a BIGINT NULL, not a TEXT one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NullKind {
    Text,
    SmallInt,
    Integer,
    BigInt,
    Float,
    Boolean,
    Uuid,
    Timestamp,
    Json,
    Bytes,
}

/// Rust types that know which [`NullKind`] their `None` maps to
pub trait TypedNull {
    fn null_kind() -> NullKind;
}

/// Column name to value association, used both as a write-set and as a filter.
///
/// Keys are unique and iterate in sorted order, so generated SQL is stable
/// for a given mapping.
pub type FieldMap = BTreeMap<String, PostgresValue>;

impl PostgresValue {
    /// Name of the variant, used in conversion diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            PostgresValue::Text(_) => "Text",
            PostgresValue::SmallInt(_) => "SmallInt",
            PostgresValue::Integer(_) => "Integer",
            PostgresValue::BigInt(_) => "BigInt",
            PostgresValue::Float(_) => "Float",
            PostgresValue::Boolean(_) => "Boolean",
            PostgresValue::Uuid(_) => "Uuid",
            PostgresValue::Timestamp(_) => "Timestamp",
            PostgresValue::Json(_) => "Json",
            PostgresValue::Bytes(_) => "Bytes",
            PostgresValue::Null(_) => "Null",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PostgresValue::Null(_))
    }
}

/// Convert basic Rust types to PostgresValue
impl From<String> for PostgresValue {
    fn from(val: String) -> Self {
        PostgresValue::Text(val)
    }
}

impl From<&str> for PostgresValue {
    fn from(val: &str) -> Self {
        PostgresValue::Text(val.to_string())
    }
}

impl From<i16> for PostgresValue {
    fn from(val: i16) -> Self {
        PostgresValue::SmallInt(val)
    }
}

impl From<i32> for PostgresValue {
    fn from(val: i32) -> Self {
        PostgresValue::Integer(val)
    }
}

impl From<i64> for PostgresValue {
    fn from(val: i64) -> Self {
        PostgresValue::BigInt(val)
    }
}

impl From<f64> for PostgresValue {
    fn from(val: f64) -> Self {
        PostgresValue::Float(val)
    }
}

impl From<bool> for PostgresValue {
    fn from(val: bool) -> Self {
        PostgresValue::Boolean(val)
    }
}

impl From<Uuid> for PostgresValue {
    fn from(val: Uuid) -> Self {
        PostgresValue::Uuid(val)
    }
}

impl From<chrono::DateTime<chrono::Utc>> for PostgresValue {
    fn from(val: chrono::DateTime<chrono::Utc>) -> Self {
        PostgresValue::Timestamp(val)
    }
}

impl From<serde_json::Value> for PostgresValue {
    fn from(val: serde_json::Value) -> Self {
        PostgresValue::Json(val)
    }
}

impl From<Vec<u8>> for PostgresValue {
    fn from(val: Vec<u8>) -> Self {
        PostgresValue::Bytes(val)
    }
}

macro_rules! typed_null {
    ($($ty:ty => $kind:ident),+ $(,)?) => {
        $(
            impl TypedNull for $ty {
                fn null_kind() -> NullKind {
                    NullKind::$kind
                }
            }
        )+
    };
}

typed_null! {
    String => Text,
    &str => Text,
    i16 => SmallInt,
    i32 => Integer,
    i64 => BigInt,
    f64 => Float,
    bool => Boolean,
    Uuid => Uuid,
    chrono::DateTime<chrono::Utc> => Timestamp,
    serde_json::Value => Json,
    Vec<u8> => Bytes,
}

impl<T> From<Option<T>> for PostgresValue
where
    T: Into<PostgresValue> + TypedNull,
{
    fn from(val: Option<T>) -> Self {
        match val {
            Some(v) => v.into(),
            None => PostgresValue::Null(T::null_kind()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_keeps_its_type() {
        assert_eq!(
            PostgresValue::from(None::<i64>),
            PostgresValue::Null(NullKind::BigInt)
        );
        assert_eq!(
            PostgresValue::from(None::<bool>),
            PostgresValue::Null(NullKind::Boolean)
        );
        assert_eq!(
            PostgresValue::from(None::<&str>),
            PostgresValue::Null(NullKind::Text)
        );
        assert_eq!(
            PostgresValue::from(None::<chrono::DateTime<chrono::Utc>>),
            PostgresValue::Null(NullKind::Timestamp)
        );
        assert!(PostgresValue::from(None::<Uuid>).is_null());
        assert_eq!(PostgresValue::from(Some(3_i64)), PostgresValue::BigInt(3));
    }
}
