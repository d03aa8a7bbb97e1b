//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Command implementations.
pub mod commands;

pub use args::Args;

/// Tracing filter used when `RUST_LOG` is unset.
///
/// Per-file progress and failures are printed through the spinner, so the log
/// only carries warnings by default.
pub const DEFAULT_LOG_FILTER: &str = "props_translate=warn";
