//! Error types for vizlite
//!
//! This module defines the error hierarchy used throughout the application.
//! We use `thiserror` for library-style errors with clear error chains.

use std::io;

/// Main error type for the vizlite application
#[derive(Debug, thiserror::Error)]
pub enum VizliteError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Database operation errors
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// The database file could not be opened. Fatal at startup; the
    /// process reports it and exits before the main loop starts.
    #[error("Failed to open database {path}: {message}")]
    OpenFailed { path: String, message: String },

    /// Statement execution failed at the engine level, or succeeded with a
    /// result shape the viewer cannot display. Recoverable: surfaced as the
    /// session's last error while any previous result stays visible.
    #[error("Query execution failed: {0}")]
    QueryFailed(String),
}

/// Configuration loading/parsing errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Home directory not found
    #[error("Could not determine home directory")]
    NoHomeDir,

    /// Failed to read the config file
    #[error("Failed to read configuration: {0}")]
    Io(#[from] io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Specialized Result type for vizlite operations
pub type Result<T> = std::result::Result<T, VizliteError>;

/// Specialized Result type for database operations
pub type DbResult<T> = std::result::Result<T, DbError>;

/// Specialized Result type for config operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
