//! Unified value mapping between Rust types and PostgreSQL
//! This crate provides the value type shared by field mappings, bound arguments and scanned rows

pub mod convert;
pub mod types;

pub use convert::{ConversionError, FromPostgresValue};
pub use types::{FieldMap, NullKind, PostgresValue, TypedNull};

/// Build a [`FieldMap`] from `column => value` pairs.
///
/// ```
/// use type_mapping::{fields, PostgresValue};
///
/// let map = fields! { "first_name" => "Ada", "office_id" => 3_i64 };
/// assert_eq!(map.get("office_id"), Some(&PostgresValue::BigInt(3)));
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::FieldMap::new()
    };
    ($($column:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::FieldMap::new();
        $(
            map.insert(
                ::std::string::String::from($column),
                $crate::PostgresValue::from($value),
            );
        )+
        map
    }};
}
