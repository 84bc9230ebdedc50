use async_trait::async_trait;
use hook_system::HookManager;
use type_mapping::PostgresValue;

use super::{Connection, QueryOutcome};
use crate::errors::TableError;
use crate::scan::SqlRow;

/// Connection wrapper running hooks around every statement.
///
/// Pre-hooks run before the statement is handed to the inner connection.
/// Post-hooks run once it was attempted, whatever the outcome.
#[derive(Debug)]
pub struct HookedConnection<C> {
    inner: C,
    hooks: HookManager,
}

impl<C: Connection> HookedConnection<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            hooks: HookManager::new(),
        }
    }

    /// Register a hook run before every statement
    pub fn add_pre_hook<F>(&self, hook: F)
    where
        F: Fn(&str, &[PostgresValue]) + Send + Sync + 'static,
    {
        self.hooks.add_pre_hook(hook);
    }

    /// Register a hook run after every statement
    pub fn add_post_hook<F>(&self, hook: F)
    where
        F: Fn(&str, &[PostgresValue]) + Send + Sync + 'static,
    {
        self.hooks.add_post_hook(hook);
    }

    pub fn hooks(&self) -> &HookManager {
        &self.hooks
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

#[async_trait]
impl<C: Connection> Connection for HookedConnection<C> {
    async fn query_one(&self, sql: &str, args: &[PostgresValue]) -> Result<SqlRow, TableError> {
        self.hooks.run_pre(sql, args);
        let _post = self.hooks.post_guard(sql, args);
        self.inner.query_one(sql, args).await
    }

    async fn query_many(
        &self,
        sql: &str,
        args: &[PostgresValue],
    ) -> Result<Vec<SqlRow>, TableError> {
        self.hooks.run_pre(sql, args);
        let _post = self.hooks.post_guard(sql, args);
        self.inner.query_many(sql, args).await
    }

    async fn execute(&self, sql: &str, args: &[PostgresValue]) -> Result<QueryOutcome, TableError> {
        self.hooks.run_pre(sql, args);
        let _post = self.hooks.post_guard(sql, args);
        self.inner.execute(sql, args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedConnection;
    use std::sync::{Arc, Mutex};

    fn logging(connection: &HookedConnection<ScriptedConnection>) -> Arc<Mutex<Vec<String>>> {
        let log = Arc::new(Mutex::new(Vec::new()));
        for label in ["pre-1", "pre-2"] {
            let log = log.clone();
            connection.add_pre_hook(move |sql, args| {
                log.lock().unwrap().push(format!("{} {} {}", label, sql, args.len()));
            });
        }
        for label in ["post-1", "post-2"] {
            let log = log.clone();
            connection.add_post_hook(move |sql, args| {
                log.lock().unwrap().push(format!("{} {} {}", label, sql, args.len()));
            });
        }
        log
    }

    #[tokio::test]
    async fn test_hooks_wrap_statement_in_order() {
        let connection = HookedConnection::new(ScriptedConnection::new());
        connection.inner().push_execute(Ok(QueryOutcome::new(3)));
        let log = logging(&connection);

        let args = [PostgresValue::from(7_i64)];
        let outcome = connection
            .execute("DELETE FROM users WHERE id = $1", &args)
            .await
            .unwrap();

        assert_eq!(outcome.rows_affected, 3);
        assert_eq!(
            *log.lock().unwrap(),
            vec![
                "pre-1 DELETE FROM users WHERE id = $1 1",
                "pre-2 DELETE FROM users WHERE id = $1 1",
                "post-1 DELETE FROM users WHERE id = $1 1",
                "post-2 DELETE FROM users WHERE id = $1 1",
            ]
        );
    }

    #[tokio::test]
    async fn test_post_hooks_run_when_driver_fails() {
        let connection = HookedConnection::new(ScriptedConnection::new());
        connection
            .inner()
            .push_query_one(Err(TableError::Database(sqlx::Error::RowNotFound)));
        let log = logging(&connection);

        let err = connection.query_one("SELECT * FROM users", &[]).await.unwrap_err();

        assert!(err.is_row_not_found());
        let log = log.lock().unwrap();
        assert_eq!(log.len(), 4);
        assert_eq!(log[3], "post-2 SELECT * FROM users 0");
    }

    #[tokio::test]
    async fn test_query_many_runs_hooks() {
        let connection = HookedConnection::new(ScriptedConnection::new());
        connection.inner().push_query_many(Ok(Vec::new()));
        let log = logging(&connection);

        let rows = connection.query_many("SELECT * FROM items", &[]).await.unwrap();

        assert!(rows.is_empty());
        assert_eq!(log.lock().unwrap().len(), 4);
        assert_eq!(connection.inner().statements().len(), 1);
    }
}
