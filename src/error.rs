//! Error types for template block handling.

use thiserror::Error;

/// Result type alias using TemplateError.
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Main error type for template block operations.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// Persisted block entity data could not be decoded.
    #[error("Malformed block entity data: {0}")]
    Nbt(String),

    /// A block state tag did not describe a valid state.
    #[error("Invalid block state: {0}")]
    InvalidBlockState(String),

    /// A placement orientation with a rotation not in 90-degree steps.
    #[error("Invalid orientation: {0}")]
    InvalidOrientation(String),
}
