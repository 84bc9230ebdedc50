//! Convenience re-exports for common hook-system usage

pub use crate::manager::{HookManager, PostHookGuard};
pub use crate::types::{tracing_hook, HookStage, QueryHook};

pub use type_mapping::PostgresValue;
