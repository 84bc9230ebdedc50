//! Core Tablehaus functionality
//!
//! This module contains the main Tablehaus struct: it provisions the
//! PostgreSQL connection, owns its hooks, and hands out table accessors
//! that share it.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use table_object::{
    Connection, HookedConnection, PostgresConnection, PostgresTable, QueryOutcome, Record,
    TableSchema,
};
use type_mapping::PostgresValue;

use crate::errors::TablehausError;
use config::{DatabaseConfig, SslMode};

/// The connection type Tablehaus provisions
pub type DefaultConnection = HookedConnection<PostgresConnection>;

/// Main Tablehaus coordinator owning the hooked database connection
#[derive(Debug, Clone)]
pub struct Tablehaus {
    connection: Arc<DefaultConnection>,
}

impl Tablehaus {
    /// Create new Tablehaus with database connection
    pub async fn new(config: &DatabaseConfig) -> Result<Self, TablehausError> {
        config.validate()?;

        let connect_options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.username)
            .password(&config.password)
            .database(&config.database)
            .ssl_mode(ssl_mode(config.ssl_mode));

        let mut pool_options = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds));

        // Set max lifetime if specified
        if config.max_lifetime_seconds > 0 {
            pool_options =
                pool_options.max_lifetime(Duration::from_secs(config.max_lifetime_seconds));
        }

        let pool = pool_options.connect_with(connect_options).await?;
        tracing::info!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            "connected to PostgreSQL"
        );

        Ok(Self::from_connection(HookedConnection::new(
            PostgresConnection::new(pool),
        )))
    }

    /// Wrap an already provisioned connection
    pub fn from_connection(connection: DefaultConnection) -> Self {
        Self {
            connection: Arc::new(connection),
        }
    }

    /// Get the shared connection
    pub fn connection(&self) -> &Arc<DefaultConnection> {
        &self.connection
    }

    /// Register a hook run before every statement
    pub fn add_pre_hook<F>(&self, hook: F)
    where
        F: Fn(&str, &[PostgresValue]) + Send + Sync + 'static,
    {
        self.connection.add_pre_hook(hook);
    }

    /// Register a hook run after every statement, failed or not
    pub fn add_post_hook<F>(&self, hook: F)
    where
        F: Fn(&str, &[PostgresValue]) + Send + Sync + 'static,
    {
        self.connection.add_post_hook(hook);
    }

    /// Table accessor for `table_name` on the shared connection
    pub fn table<T: Record>(&self, table_name: &str) -> Result<PostgresTable<T>, TablehausError> {
        let connection: Arc<dyn Connection> = self.connection.clone();
        Ok(PostgresTable::new(table_name, connection)?)
    }

    /// Table accessor for a type that names its own table
    pub fn table_for<T: Record + TableSchema>(&self) -> Result<PostgresTable<T>, TablehausError> {
        self.table(T::table_name())
    }

    /// Run a raw statement, e.g. DDL, through the hooked connection
    pub async fn execute(&self, sql: &str) -> Result<QueryOutcome, TablehausError> {
        Ok(self.connection.execute(sql, &[]).await?)
    }

    /// Check database connection health
    pub async fn health_check(&self) -> Result<(), TablehausError> {
        self.connection.query_one("SELECT 1", &[]).await?;
        Ok(())
    }
}

fn ssl_mode(mode: SslMode) -> PgSslMode {
    match mode {
        SslMode::Disable => PgSslMode::Disable,
        SslMode::Prefer => PgSslMode::Prefer,
        SslMode::Require => PgSslMode::Require,
    }
}
