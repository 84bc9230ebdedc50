use async_trait::async_trait;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{Column, PgPool, Postgres, Row, TypeInfo};
use type_mapping::{NullKind, PostgresValue};

use super::{Connection, QueryOutcome};
use crate::errors::TableError;
use crate::scan::SqlRow;

/// [`Connection`] over a sqlx PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PostgresConnection {
    pool: PgPool,
}

impl PostgresConnection {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Connection for PostgresConnection {
    async fn query_one(&self, sql: &str, args: &[PostgresValue]) -> Result<SqlRow, TableError> {
        let row = bind_all(sqlx::query(sql), args)
            .fetch_one(&self.pool)
            .await?;
        decode_row(&row)
    }

    async fn query_many(
        &self,
        sql: &str,
        args: &[PostgresValue],
    ) -> Result<Vec<SqlRow>, TableError> {
        let rows = bind_all(sqlx::query(sql), args)
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(decode_row).collect()
    }

    async fn execute(&self, sql: &str, args: &[PostgresValue]) -> Result<QueryOutcome, TableError> {
        let result = bind_all(sqlx::query(sql), args)
            .execute(&self.pool)
            .await?;
        Ok(QueryOutcome::new(result.rows_affected()))
    }
}

fn bind_all<'q>(
    query: Query<'q, Postgres, PgArguments>,
    args: &'q [PostgresValue],
) -> Query<'q, Postgres, PgArguments> {
    args.iter().fold(query, bind_value)
}

fn bind_value<'q>(
    query: Query<'q, Postgres, PgArguments>,
    value: &'q PostgresValue,
) -> Query<'q, Postgres, PgArguments> {
    match value {
        PostgresValue::Text(v) => query.bind(v.as_str()),
        PostgresValue::SmallInt(v) => query.bind(*v),
        PostgresValue::Integer(v) => query.bind(*v),
        PostgresValue::BigInt(v) => query.bind(*v),
        PostgresValue::Float(v) => query.bind(*v),
        PostgresValue::Boolean(v) => query.bind(*v),
        PostgresValue::Uuid(v) => query.bind(*v),
        PostgresValue::Timestamp(v) => query.bind(*v),
        PostgresValue::Json(v) => query.bind(sqlx::types::Json(v)),
        PostgresValue::Bytes(v) => query.bind(v.as_slice()),
        PostgresValue::Null(kind) => bind_null(query, *kind),
    }
}

fn bind_null<'q>(
    query: Query<'q, Postgres, PgArguments>,
    kind: NullKind,
) -> Query<'q, Postgres, PgArguments> {
    match kind {
        NullKind::Text => query.bind(None::<String>),
        NullKind::SmallInt => query.bind(None::<i16>),
        NullKind::Integer => query.bind(None::<i32>),
        NullKind::BigInt => query.bind(None::<i64>),
        NullKind::Float => query.bind(None::<f64>),
        NullKind::Boolean => query.bind(None::<bool>),
        NullKind::Uuid => query.bind(None::<uuid::Uuid>),
        NullKind::Timestamp => query.bind(None::<chrono::DateTime<chrono::Utc>>),
        NullKind::Json => query.bind(None::<sqlx::types::Json<serde_json::Value>>),
        NullKind::Bytes => query.bind(None::<Vec<u8>>),
    }
}

fn decode_row(row: &PgRow) -> Result<SqlRow, TableError> {
    let mut columns = Vec::with_capacity(row.len());
    let mut values = Vec::with_capacity(row.len());

    for (index, column) in row.columns().iter().enumerate() {
        values.push(decode_column(row, index, column.name(), column.type_info().name())?);
        columns.push(column.name().to_string());
    }

    Ok(SqlRow::new(columns, values))
}

fn decode_column(
    row: &PgRow,
    index: usize,
    column: &str,
    type_name: &str,
) -> Result<PostgresValue, TableError> {
    let (value, kind) = match type_name {
        "INT2" => (
            row.try_get::<Option<i16>, _>(index)?.map(PostgresValue::SmallInt),
            NullKind::SmallInt,
        ),
        "INT4" => (
            row.try_get::<Option<i32>, _>(index)?.map(PostgresValue::Integer),
            NullKind::Integer,
        ),
        "INT8" => (
            row.try_get::<Option<i64>, _>(index)?.map(PostgresValue::BigInt),
            NullKind::BigInt,
        ),
        "FLOAT4" => (
            row.try_get::<Option<f32>, _>(index)?
                .map(|v| PostgresValue::Float(f64::from(v))),
            NullKind::Float,
        ),
        "FLOAT8" => (
            row.try_get::<Option<f64>, _>(index)?.map(PostgresValue::Float),
            NullKind::Float,
        ),
        "BOOL" => (
            row.try_get::<Option<bool>, _>(index)?.map(PostgresValue::Boolean),
            NullKind::Boolean,
        ),
        "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => (
            row.try_get::<Option<String>, _>(index)?.map(PostgresValue::Text),
            NullKind::Text,
        ),
        "UUID" => (
            row.try_get::<Option<uuid::Uuid>, _>(index)?.map(PostgresValue::Uuid),
            NullKind::Uuid,
        ),
        "TIMESTAMPTZ" => (
            row.try_get::<Option<chrono::DateTime<chrono::Utc>>, _>(index)?
                .map(PostgresValue::Timestamp),
            NullKind::Timestamp,
        ),
        "TIMESTAMP" => (
            row.try_get::<Option<chrono::NaiveDateTime>, _>(index)?
                .map(|v| PostgresValue::Timestamp(v.and_utc())),
            NullKind::Timestamp,
        ),
        "JSON" | "JSONB" => (
            row.try_get::<Option<serde_json::Value>, _>(index)?
                .map(PostgresValue::Json),
            NullKind::Json,
        ),
        "BYTEA" => (
            row.try_get::<Option<Vec<u8>>, _>(index)?.map(PostgresValue::Bytes),
            NullKind::Bytes,
        ),
        other => {
            return Err(TableError::UnsupportedColumnType {
                column: column.to_string(),
                type_name: other.to_string(),
            })
        }
    };

    Ok(value.unwrap_or(PostgresValue::Null(kind)))
}
