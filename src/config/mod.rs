//! Environment-sourced configuration.

mod env;

pub use env::{Config, ConfigError, DEFAULT_STORE_PATH};
