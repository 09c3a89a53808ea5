//! Core error types for stagecal-core.
//!
//! Layout failures are split from configuration failures so callers can
//! tell a bad window apart from a broken config file.

use chrono::NaiveDateTime;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for stagecal-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Layout-related errors
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that abort a layout computation.
///
/// Malformed events are not errors: they are collected on the
/// [`Layout`](crate::layout::Layout) and the rest of the batch is placed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Window end precedes window start
    #[error("Invalid window: end ({end}) must not be before start ({start})")]
    InvalidWindow {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    /// Year/month pair does not name a calendar month
    #[error("Invalid month: {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the config tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
