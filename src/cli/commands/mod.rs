//! Command implementations.

/// Translation sweep handler.
pub mod translate;
