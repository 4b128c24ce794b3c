//! Custom error types for the common library
//!
//! This module defines the errors raised while assembling the application
//! configuration.

use config::ConfigError as SourceError;
use thiserror::Error;

/// Custom error type for configuration loading
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error occurred while building or reading configuration sources
    #[error("Configuration source error: {0}")]
    Source(#[source] SourceError),

    /// A configuration value was present but unusable
    #[error("Invalid configuration value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl From<SourceError> for ConfigError {
    fn from(err: SourceError) -> Self {
        ConfigError::Source(err)
    }
}

/// Type alias for Result with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
