use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use table_object::{Record, Scannable, TableError, TableSchema};
use type_mapping::{fields, FieldMap};

/// Oldest accepted age, in years
const MAX_AGE_YEARS: i32 = 120;

/// A user row in the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: i64,
    first_name: String,
    last_name: String,
    /// Unix timestamp, seconds
    birth_date: i64,
    office_id: i64,
}

impl User {
    /// Create a user that has not been stored yet; the table assigns the id
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: i64,
        office_id: i64,
    ) -> Self {
        Self {
            id: 0,
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date,
            office_id,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn birth_date(&self) -> i64 {
        self.birth_date
    }

    pub fn office_id(&self) -> i64 {
        self.office_id
    }

    /// Age in whole calendar years between the birth year and `now`'s year
    fn age_in_years(&self, now: DateTime<Utc>) -> Result<i32, TableError> {
        let born = DateTime::from_timestamp(self.birth_date, 0).ok_or_else(|| {
            TableError::validation(format!(
                "Illegal birth date {}, timestamp is out of range",
                self.birth_date
            ))
        })?;
        Ok(now.year() - born.year())
    }

    fn validate(&self, now: DateTime<Utc>) -> Result<(), TableError> {
        if self.first_name.is_empty() {
            return Err(TableError::validation("First name of this user is empty"));
        }

        if self.last_name.chars().any(char::is_whitespace) {
            return Err(TableError::validation(
                "Whitespace in last names is not allowed, middle names belong in first_name",
            ));
        }

        let age = self.age_in_years(now)?;
        if age > MAX_AGE_YEARS {
            return Err(TableError::validation(format!(
                "Illegal birth date, this person is over {} years old",
                MAX_AGE_YEARS
            )));
        }
        if age < 0 {
            return Err(TableError::validation(
                "Illegal birth date, this person has yet to be born",
            ));
        }

        Ok(())
    }
}

impl Record for User {
    fn from_row<S: Scannable>(row: &mut S) -> Result<Self, TableError> {
        Ok(Self {
            id: row.scan()?,
            first_name: row.scan()?,
            last_name: row.scan()?,
            birth_date: row.scan()?,
            office_id: row.scan()?,
        })
    }

    fn to_fields(&self) -> Result<FieldMap, TableError> {
        self.validate(Utc::now())?;

        Ok(fields! {
            "first_name" => self.first_name.as_str(),
            "last_name" => self.last_name.as_str(),
            "birth_date" => self.birth_date,
            "office_id" => self.office_id,
        })
    }
}

impl TableSchema for User {
    fn table_name() -> &'static str {
        "users"
    }

    fn create_table_sql() -> String {
        "CREATE TABLE IF NOT EXISTS users (\
         id SERIAL PRIMARY KEY, \
         first_name TEXT, \
         last_name TEXT, \
         birth_date BIGINT, \
         office_id BIGINT)"
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use table_object::{RowScanner, SqlRow};
    use type_mapping::PostgresValue;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
    }

    fn born(year: i32) -> i64 {
        Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap().timestamp()
    }

    #[test]
    fn test_valid_user_produces_fields_without_id() {
        let user = User::new("mads hvid", "byriel", born(1990), 3);
        let fields = user.to_fields().unwrap();

        assert_eq!(fields.len(), 4);
        assert!(!fields.contains_key("id"));
        assert_eq!(fields["first_name"], PostgresValue::from("mads hvid"));
        assert_eq!(fields["office_id"], PostgresValue::BigInt(3));
    }

    #[test]
    fn test_empty_first_name_is_rejected() {
        let user = User::new("", "byriel", born(1990), 0);
        assert!(matches!(user.to_fields(), Err(TableError::Validation(_))));
    }

    #[test]
    fn test_whitespace_in_last_name_is_rejected() {
        for last_name in ["van dyke", "tab\tname", "trailing "] {
            let user = User::new("mads", last_name, born(1990), 0);
            assert!(
                matches!(user.validate(now()), Err(TableError::Validation(_))),
                "{:?} should be rejected",
                last_name
            );
        }
    }

    #[test]
    fn test_age_bounds() {
        assert!(User::new("a", "b", born(1906), 0).validate(now()).is_ok());
        assert!(User::new("a", "b", born(2026), 0).validate(now()).is_ok());

        let too_old = User::new("a", "b", born(1905), 0).validate(now());
        assert!(matches!(too_old, Err(TableError::Validation(msg)) if msg.contains("over 120")));

        let unborn = User::new("a", "b", born(2027), 0).validate(now());
        assert!(matches!(unborn, Err(TableError::Validation(msg)) if msg.contains("yet to be born")));
    }

    #[test]
    fn test_out_of_range_timestamp_is_rejected() {
        let user = User::new("a", "b", i64::MAX, 0);
        assert!(matches!(user.validate(now()), Err(TableError::Validation(_))));
    }

    #[test]
    fn test_from_row_reads_physical_column_order() {
        let row = SqlRow::new(
            vec![
                "id".into(),
                "first_name".into(),
                "last_name".into(),
                "birth_date".into(),
                "office_id".into(),
            ],
            vec![
                PostgresValue::Integer(42),
                PostgresValue::from("mads hvid"),
                PostgresValue::from("byriel"),
                PostgresValue::BigInt(born(1990)),
                PostgresValue::BigInt(7),
            ],
        );
        let mut scanner = RowScanner::new(row);
        let user = User::from_row(&mut scanner).unwrap();
        scanner.finish().unwrap();

        assert_eq!(user.id(), 42);
        assert_eq!(user.first_name(), "mads hvid");
        assert_eq!(user.office_id(), 7);
    }

    #[test]
    fn test_fields_round_trip_through_row() {
        let user = User::new("mads hvid", "byriel", born(1990), 5);
        let fields = user.to_fields().unwrap();

        // Lay the written fields out the way SELECT * returns them, with a generated id
        let mut values = vec![PostgresValue::Integer(1)];
        for column in ["first_name", "last_name", "birth_date", "office_id"] {
            values.push(fields[column].clone());
        }
        let mut scanner = RowScanner::new(SqlRow::from_values(values));
        let stored = User::from_row(&mut scanner).unwrap();

        assert_eq!(stored.id(), 1);
        assert_eq!(stored, User { id: 1, ..user });
    }

    #[test]
    fn test_schema() {
        assert_eq!(User::table_name(), "users");
        assert!(User::create_table_sql().starts_with("CREATE TABLE IF NOT EXISTS users ("));
        assert_eq!(User::drop_table_sql(), "DROP TABLE IF EXISTS users");
    }
}
