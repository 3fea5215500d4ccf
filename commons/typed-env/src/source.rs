//! Where variable values come from.
//!
//! Accessors never touch `std::env` directly; they read through an
//! [`EnvSource`]. [`ProcessEnv`] is the real process table, the other
//! sources exist so callers and tests can supply values without mutating it.

use std::collections::HashMap;
use std::ffi::OsString;

/// Read-only lookup of a variable by name.
pub trait EnvSource {
    fn lookup(&self, key: &str) -> Option<OsString>;
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn lookup(&self, key: &str) -> Option<OsString> {
        (**self).lookup(key)
    }
}

impl<S: EnvSource + ?Sized> EnvSource for Box<S> {
    fn lookup(&self, key: &str) -> Option<OsString> {
        (**self).lookup(key)
    }
}

/// The environment of the running process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<OsString> {
        // var_os panics on these; an unusable name is simply not set
        if key.is_empty() || key.contains(['=', '\0']) {
            return None;
        }
        std::env::var_os(key)
    }
}

/// An owned snapshot of variables.
#[derive(Debug, Default, Clone)]
pub struct MapEnv {
    vars: HashMap<String, OsString>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies the current process environment.
    pub fn capture() -> Self {
        std::env::vars_os()
            .filter_map(|(k, v)| k.into_string().ok().map(|k| (k, v)))
            .collect()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<OsString>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<OsString> {
        self.vars.remove(key)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<OsString>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn lookup(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }
}

/// Source backed by a closure, see [`from_fn`].
#[derive(Clone)]
pub struct FnEnv<F> {
    f: F,
}

impl<F> std::fmt::Debug for FnEnv<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnEnv").finish_non_exhaustive()
    }
}

/// Adapts a lookup closure into an [`EnvSource`].
///
/// ```
/// use typed_env::{Env, from_fn};
///
/// let env = Env::new(from_fn(|key| (key == "PORT").then(|| "8080".to_string())));
/// assert_eq!(env.uint16("PORT", 80), 8080);
/// ```
pub fn from_fn<F>(f: F) -> FnEnv<F>
where
    F: Fn(&str) -> Option<String>,
{
    FnEnv { f }
}

impl<F> EnvSource for FnEnv<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn lookup(&self, key: &str) -> Option<OsString> {
        (self.f)(key).map(OsString::from)
    }
}

/// Scopes every lookup under a fixed prefix, so `PORT` reads `APP_PORT`.
#[derive(Debug, Clone)]
pub struct Prefixed<S> {
    prefix: String,
    inner: S,
}

impl<S> Prefixed<S> {
    pub fn new(prefix: impl Into<String>, inner: S) -> Self {
        Self {
            prefix: prefix.into(),
            inner,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: EnvSource> EnvSource for Prefixed<S> {
    fn lookup(&self, key: &str) -> Option<OsString> {
        self.inner.lookup(&format!("{}{}", self.prefix, key))
    }
}
