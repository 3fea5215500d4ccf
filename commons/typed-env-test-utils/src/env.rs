//! Environment variable test helpers.
//!
//! Tests run in parallel threads of one process and share its environment, so
//! every helper here hands back a guard that restores the previous value on
//! drop, and [`unique_key`] gives each test its own variable names.

use std::sync::atomic::{AtomicU64, Ordering};

static KEY_SEQ: AtomicU64 = AtomicU64::new(0);

/// Returns a variable name that no other caller in this process will get.
pub fn unique_key(stem: &str) -> String {
    let seq = KEY_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("TYPED_ENV_TEST_{}_{}_{}", stem, std::process::id(), seq)
}

/// RAII guard that restores (or unsets) the original value when dropped.
pub struct EnvGuard {
    key: String,
    prev: Option<std::ffi::OsString>,
}

impl EnvGuard {
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            if let Some(ref v) = self.prev {
                std::env::set_var(&self.key, v);
            } else {
                std::env::remove_var(&self.key);
            }
        }
    }
}

/// Set an environment variable returning a guard that restores the previous value when dropped.
pub fn set_env_guarded(key: &str, val: &str) -> EnvGuard {
    let prev = std::env::var_os(key);
    unsafe {
        std::env::set_var(key, val);
    }
    EnvGuard {
        key: key.to_string(),
        prev,
    }
}

/// Unset an environment variable until the returned guard is dropped.
pub fn remove_env_guarded(key: &str) -> EnvGuard {
    let prev = std::env::var_os(key);
    unsafe {
        std::env::remove_var(key);
    }
    EnvGuard {
        key: key.to_string(),
        prev,
    }
}

/// Builder-style collection of environment guards. Dropping restores all keys.
pub struct EnvVars {
    guards: Vec<EnvGuard>,
}

impl EnvVars {
    pub fn new() -> Self {
        Self { guards: Vec::new() }
    }

    /// Set a key -> val, capturing previous value; chainable.
    pub fn set(mut self, key: &str, val: &str) -> Self {
        self.guards.push(set_env_guarded(key, val));
        self
    }

    /// Unset a key for the lifetime of the collection; chainable.
    pub fn unset(mut self, key: &str) -> Self {
        self.guards.push(remove_env_guarded(key));
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.guards.iter().map(EnvGuard::key)
    }
}

impl Drop for EnvVars {
    fn drop(&mut self) {
        // newest first, so a key set twice ends at its value before the first set
        while let Some(guard) = self.guards.pop() {
            drop(guard);
        }
    }
}

impl Default for EnvVars {
    fn default() -> Self {
        Self::new()
    }
}
