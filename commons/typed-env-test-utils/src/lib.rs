//! Helpers for tests that need to touch the real process environment.

pub mod env;

pub use env::{
    EnvGuard, EnvVars, remove_env_guarded, set_env_guarded, unique_key,
};
