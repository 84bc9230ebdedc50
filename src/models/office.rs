use serde::{Deserialize, Serialize};
use table_object::{Record, Scannable, TableError, TableSchema};
use type_mapping::{fields, FieldMap};

/// An office row in the `offices` table, referenced by `User::office_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Office {
    id: i64,
    name: String,
    capacity: i32,
}

impl Office {
    pub fn new(name: impl Into<String>, capacity: i32) -> Self {
        Self {
            id: 0,
            name: name.into(),
            capacity,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> i32 {
        self.capacity
    }
}

impl Record for Office {
    fn from_row<S: Scannable>(row: &mut S) -> Result<Self, TableError> {
        Ok(Self {
            id: row.scan()?,
            name: row.scan()?,
            capacity: row.scan()?,
        })
    }

    fn to_fields(&self) -> Result<FieldMap, TableError> {
        if self.name.trim().is_empty() {
            return Err(TableError::validation("Office name is empty"));
        }
        if self.capacity < 0 {
            return Err(TableError::validation(format!(
                "Office capacity must not be negative, got {}",
                self.capacity
            )));
        }

        Ok(fields! {
            "name" => self.name.as_str(),
            "capacity" => self.capacity,
        })
    }
}

impl TableSchema for Office {
    fn table_name() -> &'static str {
        "offices"
    }

    fn create_table_sql() -> String {
        "CREATE TABLE IF NOT EXISTS offices (\
         id SERIAL PRIMARY KEY, \
         name TEXT, \
         capacity INT)"
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use table_object::{RowScanner, SqlRow};
    use type_mapping::{NullKind, PostgresValue};

    #[test]
    fn test_fields() {
        let fields = Office::new("Aarhus", 40).to_fields().unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["name"], PostgresValue::from("Aarhus"));
        assert_eq!(fields["capacity"], PostgresValue::Integer(40));
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            Office::new("  ", 10).to_fields(),
            Err(TableError::Validation(_))
        ));
        assert!(matches!(
            Office::new("Aarhus", -1).to_fields(),
            Err(TableError::Validation(_))
        ));
        assert!(Office::new("Aarhus", 0).to_fields().is_ok());
    }

    #[test]
    fn test_from_row() {
        let row = SqlRow::from_values(vec![
            PostgresValue::Integer(3),
            PostgresValue::from("Aarhus"),
            PostgresValue::Integer(40),
        ]);
        let mut scanner = RowScanner::new(row);
        let office = Office::from_row(&mut scanner).unwrap();
        scanner.finish().unwrap();

        assert_eq!(office.id(), 3);
        assert_eq!(office.name(), "Aarhus");
        assert_eq!(office.capacity(), 40);
    }

    #[test]
    fn test_null_capacity_fails_to_decode() {
        let row = SqlRow::from_values(vec![
            PostgresValue::Integer(3),
            PostgresValue::from("Aarhus"),
            PostgresValue::Null(NullKind::Integer),
        ]);
        let result = Office::from_row(&mut RowScanner::new(row));
        assert!(matches!(result, Err(TableError::Conversion(_))));
    }
}
