//! Validation module
//!
//! Table and column names are interpolated into SQL text, so every name
//! passes through these types before it reaches a statement. Values never
//! do; they always travel as bound arguments.

use std::fmt;

use thiserror::Error;

/// Validation errors for database identifiers
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IdentifierError {
    #[error("Invalid characters in name '{0}': only alphanumeric characters and underscores are allowed")]
    InvalidCharacters(String),

    #[error("Name '{name}' is too long: {length} characters (max {max_length})")]
    TooLong {
        name: String,
        length: usize,
        max_length: usize,
    },

    #[error("Name cannot be empty")]
    Empty,

    #[error("Name '{0}' must start with a letter or underscore")]
    InvalidStartCharacter(String),

    #[error("Name '{0}' is a reserved SQL keyword")]
    ReservedKeyword(String),
}

/// PostgreSQL identifier length limit
const MAX_IDENTIFIER_LENGTH: usize = 63;

const RESERVED_KEYWORDS: &[&str] = &[
    "ALL", "ALTER", "AND", "ANY", "AS", "ASC", "BETWEEN", "BY", "CASE", "CAST", "CHECK",
    "COLUMN", "CONSTRAINT", "CREATE", "CROSS", "DEFAULT", "DELETE", "DESC", "DISTINCT", "DO",
    "DROP", "ELSE", "END", "EXCEPT", "EXISTS", "FALSE", "FETCH", "FOR", "FOREIGN", "FROM",
    "FULL", "GRANT", "GROUP", "HAVING", "IN", "INNER", "INSERT", "INTERSECT", "INTO", "IS",
    "JOIN", "LEFT", "LIKE", "LIMIT", "NOT", "NULL", "OFFSET", "ON", "OR", "ORDER", "OUTER",
    "PRIMARY", "REFERENCES", "RETURNING", "RIGHT", "SELECT", "SET", "TABLE", "THEN", "TO",
    "TRUE", "UNION", "UNIQUE", "UPDATE", "USER", "USING", "VALUES", "WHEN", "WHERE", "WITH",
];

fn validate_identifier(name: &str) -> Result<(), IdentifierError> {
    let first_char = name.chars().next().ok_or(IdentifierError::Empty)?;

    if name.len() > MAX_IDENTIFIER_LENGTH {
        return Err(IdentifierError::TooLong {
            name: name.to_string(),
            length: name.len(),
            max_length: MAX_IDENTIFIER_LENGTH,
        });
    }

    if !first_char.is_ascii_alphabetic() && first_char != '_' {
        return Err(IdentifierError::InvalidStartCharacter(name.to_string()));
    }

    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(IdentifierError::InvalidCharacters(name.to_string()));
    }

    if RESERVED_KEYWORDS.contains(&name.to_ascii_uppercase().as_str()) {
        return Err(IdentifierError::ReservedKeyword(name.to_string()));
    }

    Ok(())
}

/// A validated table name that is safe to use in SQL queries
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedTableName(String);

impl ValidatedTableName {
    pub fn new(name: &str) -> Result<Self, IdentifierError> {
        validate_identifier(name)?;
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValidatedTableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated column name that is safe to use in SQL queries
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedFieldName<'a>(&'a str);

impl<'a> ValidatedFieldName<'a> {
    pub fn new(name: &'a str) -> Result<Self, IdentifierError> {
        validate_identifier(name)?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

impl fmt::Display for ValidatedFieldName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["users", "offices", "first_name", "_private", "table2", "id"] {
            assert!(ValidatedTableName::new(name).is_ok(), "{} should be valid", name);
        }
        assert_eq!(ValidatedFieldName::new("office_id").unwrap().as_str(), "office_id");
    }

    #[test]
    fn test_rejects_injection_attempts() {
        assert_eq!(
            ValidatedFieldName::new("id; DROP TABLE users"),
            Err(IdentifierError::InvalidCharacters(
                "id; DROP TABLE users".to_string()
            ))
        );
        assert!(ValidatedTableName::new("users--").is_err());
        assert!(ValidatedTableName::new("\"users\"").is_err());
    }

    #[test]
    fn test_rejects_malformed_names() {
        assert_eq!(ValidatedTableName::new(""), Err(IdentifierError::Empty));
        assert_eq!(
            ValidatedTableName::new("1users"),
            Err(IdentifierError::InvalidStartCharacter("1users".to_string()))
        );

        let long = "a".repeat(64);
        assert!(matches!(
            ValidatedTableName::new(&long),
            Err(IdentifierError::TooLong { length: 64, max_length: 63, .. })
        ));
        assert!(ValidatedTableName::new(&"a".repeat(63)).is_ok());
    }

    #[test]
    fn test_rejects_reserved_keywords_case_insensitively() {
        assert_eq!(
            ValidatedTableName::new("select"),
            Err(IdentifierError::ReservedKeyword("select".to_string()))
        );
        assert!(ValidatedTableName::new("User").is_err());
        assert!(ValidatedTableName::new("users").is_ok());
    }
}
