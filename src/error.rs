//! Crate-wide error types.
//!
//! This module defines the top-level error type that encompasses the
//! API and configuration error kinds, allowing for type-safe error
//! handling by consumers that use both.

pub use crate::clickup::ClickUpError;
pub use crate::config::ConfigError;

/// Top-level error type.
///
/// Uses `thiserror` for automatic error derivation and conversion.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// ClickUp API-related errors
    #[error("ClickUp API error: {0}")]
    ClickUp(#[from] ClickUpError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Result with the crate error.
pub type Result<T> = std::result::Result<T, Error>;
