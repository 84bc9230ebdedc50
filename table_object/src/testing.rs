//! Scripted in-memory connection for unit tests

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use type_mapping::PostgresValue;

use crate::connection::{Connection, QueryOutcome};
use crate::errors::TableError;
use crate::scan::SqlRow;

/// Connection answering from queued responses and recording every statement
#[derive(Debug, Default)]
pub(crate) struct ScriptedConnection {
    query_one: Mutex<VecDeque<Result<SqlRow, TableError>>>,
    query_many: Mutex<VecDeque<Result<Vec<SqlRow>, TableError>>>,
    execute: Mutex<VecDeque<Result<QueryOutcome, TableError>>>,
    statements: Mutex<Vec<(String, Vec<PostgresValue>)>>,
}

impl ScriptedConnection {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_query_one(&self, response: Result<SqlRow, TableError>) {
        self.query_one.lock().unwrap().push_back(response);
    }

    pub(crate) fn push_query_many(&self, response: Result<Vec<SqlRow>, TableError>) {
        self.query_many.lock().unwrap().push_back(response);
    }

    pub(crate) fn push_execute(&self, response: Result<QueryOutcome, TableError>) {
        self.execute.lock().unwrap().push_back(response);
    }

    /// Every statement received so far, in order
    pub(crate) fn statements(&self) -> Vec<(String, Vec<PostgresValue>)> {
        self.statements.lock().unwrap().clone()
    }

    fn record(&self, sql: &str, args: &[PostgresValue]) {
        self.statements
            .lock()
            .unwrap()
            .push((sql.to_string(), args.to_vec()));
    }
}

fn unscripted() -> TableError {
    TableError::Database(sqlx::Error::Protocol("no scripted response".into()))
}

#[async_trait]
impl Connection for ScriptedConnection {
    async fn query_one(&self, sql: &str, args: &[PostgresValue]) -> Result<SqlRow, TableError> {
        self.record(sql, args);
        self.query_one.lock().unwrap().pop_front().unwrap_or_else(|| Err(unscripted()))
    }

    async fn query_many(
        &self,
        sql: &str,
        args: &[PostgresValue],
    ) -> Result<Vec<SqlRow>, TableError> {
        self.record(sql, args);
        self.query_many.lock().unwrap().pop_front().unwrap_or_else(|| Err(unscripted()))
    }

    async fn execute(&self, sql: &str, args: &[PostgresValue]) -> Result<QueryOutcome, TableError> {
        self.record(sql, args);
        self.execute.lock().unwrap().pop_front().unwrap_or_else(|| Err(unscripted()))
    }
}
