//! Hook system for query observation
//!
//! This crate provides the ordered pre/post callbacks that a connection
//! runs around every statement it sends in the Tablehaus ecosystem.

pub mod manager;
pub mod prelude;
pub mod types;

pub use manager::{HookManager, PostHookGuard};
pub use types::{tracing_hook, HookStage, QueryHook};
