use std::sync::{Arc, PoisonError, RwLock};

use type_mapping::PostgresValue;

use crate::types::QueryHook;

/// Ordered pre/post hook lists shared by a connection
pub struct HookManager {
    pre_hooks: RwLock<Vec<QueryHook>>,
    post_hooks: RwLock<Vec<QueryHook>>,
}

impl std::fmt::Debug for HookManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookManager")
            .field("pre_hook_count", &self.pre_hook_count())
            .field("post_hook_count", &self.post_hook_count())
            .finish()
    }
}

impl HookManager {
    pub fn new() -> Self {
        Self {
            pre_hooks: RwLock::new(Vec::new()),
            post_hooks: RwLock::new(Vec::new()),
        }
    }

    /// Add a hook that runs before every statement
    pub fn add_pre_hook<F>(&self, hook: F)
    where
        F: Fn(&str, &[PostgresValue]) + Send + Sync + 'static,
    {
        self.pre_hooks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(hook));
    }

    /// Add a hook that runs after every attempted statement, failed or not
    pub fn add_post_hook<F>(&self, hook: F)
    where
        F: Fn(&str, &[PostgresValue]) + Send + Sync + 'static,
    {
        self.post_hooks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(hook));
    }

    /// Run pre-hooks in registration order
    pub fn run_pre(&self, sql: &str, args: &[PostgresValue]) {
        Self::run(&self.pre_hooks, sql, args);
    }

    /// Run post-hooks in registration order
    pub fn run_post(&self, sql: &str, args: &[PostgresValue]) {
        Self::run(&self.post_hooks, sql, args);
    }

    /// Arm the post-hooks for a statement; they run when the guard drops
    pub fn post_guard<'a>(&'a self, sql: &'a str, args: &'a [PostgresValue]) -> PostHookGuard<'a> {
        PostHookGuard {
            manager: self,
            sql,
            args,
        }
    }

    /// Clear all hooks
    pub fn clear_hooks(&self) {
        self.pre_hooks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.post_hooks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn pre_hook_count(&self) -> usize {
        self.pre_hooks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn post_hook_count(&self) -> usize {
        self.post_hooks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn run(hooks: &RwLock<Vec<QueryHook>>, sql: &str, args: &[PostgresValue]) {
        // Snapshot so a hook can register more hooks without deadlocking
        let snapshot: Vec<QueryHook> = hooks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for hook in snapshot.iter() {
            hook(sql, args);
        }
    }
}

impl Default for HookManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs the post-hooks of a statement when dropped.
///
/// Holding the guard across the awaited operation means the post-hooks
/// fire on success, on error, on unwinding, and when the operation future
/// is dropped before completion.
#[must_use = "post-hooks run when the guard is dropped"]
pub struct PostHookGuard<'a> {
    manager: &'a HookManager,
    sql: &'a str,
    args: &'a [PostgresValue],
}

impl Drop for PostHookGuard<'_> {
    fn drop(&mut self) {
        self.manager.run_post(self.sql, self.args);
    }
}
