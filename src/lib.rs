//! # Tablehaus
//!
//! A minimal generic data-mapping layer for PostgreSQL: a connection with
//! pre/post query hooks, a generic table accessor building parameterized
//! SQL, and records that describe their own fields.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tablehaus::prelude::*;
//! use tablehaus::models::User;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::new(
//!         "localhost".to_string(), 5432, "tablehaus".to_string(),
//!         "postgres".to_string(), "password".to_string(),
//!     );
//!
//!     let tablehaus = Tablehaus::new(&config).await?;
//!     tablehaus.add_pre_hook(tracing_hook(HookStage::Pre));
//!     tablehaus.auto_migrate::<User>(true).await?;
//!
//!     let users = tablehaus.table_for::<User>()?;
//!     users.insert(&User::new("Ada", "Lovelace", 0, 1)).await?;
//!
//!     let ada = users.select_first(Some(&fields! { "first_name" => "Ada" })).await?;
//!     println!("Selected user: {:?}", ada);
//!
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod errors;
pub mod migration;
pub mod models;
pub mod prelude;

// Re-export the main public types for convenience
pub use self::core::{DefaultConnection, Tablehaus};
pub use errors::TablehausError;

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig, LoggingConfig, SslMode};

// Conditional logging macros
pub use table_object::{debug_log, trace_log};

// Re-export internal crates used by the public API
pub use hook_system;
pub use table_object;
pub use type_mapping;

// Re-export external dependencies used in public API
pub use async_trait;
pub use sqlx;
