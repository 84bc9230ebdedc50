//! SQL statement generation
//!
//! Every statement pairs its `$N` placeholders with the argument vector by
//! construction: a placeholder is numbered at the moment its value is
//! pushed, so the Nth placeholder always binds the Nth argument.

use type_mapping::{FieldMap, PostgresValue};

use crate::errors::TableError;
use crate::validation::{ValidatedFieldName, ValidatedTableName};

/// SQL text plus its positional arguments
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub args: Vec<PostgresValue>,
}

/// Accumulates SQL text and arguments, numbering placeholders as values arrive
struct ClauseWriter {
    sql: String,
    args: Vec<PostgresValue>,
    first_param: usize,
}

impl ClauseWriter {
    fn new(sql: String, first_param: usize) -> Self {
        Self {
            sql,
            args: Vec::new(),
            first_param,
        }
    }

    /// Number of the next placeholder to hand out
    fn next_param(&self) -> usize {
        self.first_param + self.args.len()
    }

    /// Append `column = $N` and its value
    fn push_assignment(&mut self, column: &str, value: &PostgresValue) -> Result<(), TableError> {
        let column = ValidatedFieldName::new(column)?;
        let param = self.next_param();
        self.sql.push_str(column.as_str());
        self.sql.push_str(" = $");
        self.sql.push_str(&param.to_string());
        self.args.push(value.clone());
        Ok(())
    }

    /// Append ` WHERE a = $k AND b = $k+1 ...`; nothing for no filter
    fn push_where(&mut self, filter: Option<&FieldMap>) -> Result<(), TableError> {
        let Some(filter) = filter else {
            return Ok(());
        };

        for (i, (column, value)) in filter.iter().enumerate() {
            self.sql.push_str(if i == 0 { " WHERE " } else { " AND " });
            self.push_assignment(column, value)?;
        }
        Ok(())
    }

    fn finish(self) -> Statement {
        Statement {
            sql: self.sql,
            args: self.args,
        }
    }
}

pub struct SqlGenerator;

impl SqlGenerator {
    /// Build a WHERE clause whose first placeholder is `$first_param`.
    ///
    /// Returns the clause with a leading space, or an empty string when
    /// the filter is `None` or empty.
    pub fn build_where_clause(
        filter: Option<&FieldMap>,
        first_param: usize,
    ) -> Result<(String, Vec<PostgresValue>), TableError> {
        let mut writer = ClauseWriter::new(String::new(), first_param);
        writer.push_where(filter)?;
        Ok((writer.sql, writer.args))
    }

    /// `SELECT * FROM <table>[ WHERE ...]`
    pub fn select(
        table: &ValidatedTableName,
        filter: Option<&FieldMap>,
    ) -> Result<Statement, TableError> {
        let mut writer = ClauseWriter::new(format!("SELECT * FROM {}", table), 1);
        writer.push_where(filter)?;
        Ok(writer.finish())
    }

    /// `INSERT INTO <table> (c1, c2) VALUES ($1, $2)`
    ///
    /// Columns, placeholders and arguments come out of one pass over the
    /// fields, so they line up. No fields inserts a row of defaults.
    pub fn insert(table: &ValidatedTableName, fields: &FieldMap) -> Result<Statement, TableError> {
        if fields.is_empty() {
            return Ok(Statement {
                sql: format!("INSERT INTO {} DEFAULT VALUES", table),
                args: Vec::new(),
            });
        }

        let mut columns = Vec::with_capacity(fields.len());
        let mut placeholders = Vec::with_capacity(fields.len());
        let mut args = Vec::with_capacity(fields.len());

        for (column, value) in fields {
            columns.push(ValidatedFieldName::new(column)?.as_str());
            args.push(value.clone());
            placeholders.push(format!("${}", args.len()));
        }

        Ok(Statement {
            sql: format!(
                "INSERT INTO {} ({}) VALUES ({})",
                table,
                columns.join(", "),
                placeholders.join(", ")
            ),
            args,
        })
    }

    /// `UPDATE <table> SET c1 = $1, c2 = $2[ WHERE w = $3]`
    ///
    /// SET placeholders are numbered first; WHERE placeholders continue the
    /// same counter, matching the order the arguments are appended.
    pub fn update(
        table: &ValidatedTableName,
        set: &FieldMap,
        filter: Option<&FieldMap>,
    ) -> Result<Statement, TableError> {
        let mut writer = ClauseWriter::new(format!("UPDATE {} SET ", table), 1);

        for (i, (column, value)) in set.iter().enumerate() {
            if i > 0 {
                writer.sql.push_str(", ");
            }
            writer.push_assignment(column, value)?;
        }

        writer.push_where(filter)?;
        Ok(writer.finish())
    }

    /// `DELETE FROM <table>[ WHERE ...]`
    pub fn delete(
        table: &ValidatedTableName,
        filter: Option<&FieldMap>,
    ) -> Result<Statement, TableError> {
        let mut writer = ClauseWriter::new(format!("DELETE FROM {}", table), 1);
        writer.push_where(filter)?;
        Ok(writer.finish())
    }
}
