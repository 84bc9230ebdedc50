//! Convenience re-exports for common Tablehaus usage
//!
//! # Example
//!
//! ```rust
//! use tablehaus::prelude::*;
//!
//! // Now you have access to the common Tablehaus types and traits
//! ```

// Core Tablehaus components
pub use crate::core::{DefaultConnection, Tablehaus};
pub use crate::errors::TablehausError;

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig, LoggingConfig, SslMode};

// Tables, records, connections
pub use table_object::prelude::*;

// Query hooks
pub use hook_system::prelude::*;

// Common external dependencies
pub use anyhow;
pub use async_trait;
pub use sqlx;
pub use tokio;
