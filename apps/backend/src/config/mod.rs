//! Process configuration.
//!
//! Everything is read from environment variables. Parsing goes through an
//! injectable lookup function so tests never have to mutate the process
//! environment.

pub mod app;
pub mod db;

pub use app::{AppConfig, RuntimeEnv, StoreKind};

use crate::error::AppError;

/// Source of configuration values, usually `std::env::var`.
pub trait Lookup {
    fn get(&self, name: &str) -> Option<String>;
}

impl<F> Lookup for F
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// Lookup backed by the process environment.
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Non-empty value for `name`, or `default`.
pub(crate) fn var_or(env: &impl Lookup, name: &str, default: &str) -> String {
    env.get(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Required, non-empty value for `name`.
pub(crate) fn must_var(env: &impl Lookup, name: &str) -> Result<String, AppError> {
    env.get(name)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| {
            AppError::config(format!("Required environment variable '{name}' is not set"))
        })
}
