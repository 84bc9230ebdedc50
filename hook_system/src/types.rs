//! Type definitions for the hook system

use std::fmt;
use std::sync::Arc;

use type_mapping::PostgresValue;

/// Callback invoked with the SQL text and its positional arguments
pub type QueryHook = Arc<dyn Fn(&str, &[PostgresValue]) + Send + Sync>;

/// When a hook runs relative to the statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookStage {
    Pre,
    Post,
}

impl fmt::Display for HookStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookStage::Pre => write!(f, "executing"),
            HookStage::Post => write!(f, "finished"),
        }
    }
}

/// Hook that logs every statement and its arguments through `tracing`
pub fn tracing_hook(stage: HookStage) -> impl Fn(&str, &[PostgresValue]) + Send + Sync + 'static {
    move |sql: &str, args: &[PostgresValue]| {
        tracing::debug!(
            stage = %stage,
            arg_count = args.len(),
            "{}: {} args={:?}",
            stage,
            sql,
            args
        );
    }
}
