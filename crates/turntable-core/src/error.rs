//! Error types shared by the core models.

use thiserror::Error;

/// Errors raised while loading a [`PageConfig`](crate::PageConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Config value `{field}` out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

/// Errors reported by a [`SpinSurface`](crate::SpinSurface).
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Failed to release pointer {pointer_id}: {reason}")]
    Release { pointer_id: i32, reason: String },
    #[error("Surface error: {0}")]
    Other(String),
}

/// Result type for config loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
