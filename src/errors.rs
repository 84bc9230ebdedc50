//! Error types for the Tablehaus crate
//!
//! This module contains all error types that can be returned by Tablehaus operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TablehausError {
    #[error("Database connection error: {0}")]
    DatabaseConnection(#[from] sqlx::Error),

    #[error(transparent)]
    Table(#[from] table_object::TableError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
