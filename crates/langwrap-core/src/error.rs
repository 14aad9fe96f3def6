//! Error types for langwrap-core.

use thiserror::Error;

/// Errors raised when validating untyped annotation options.
///
/// This is the only error kind the annotation path itself can produce; text
/// input is never invalid. Messages match the reference implementation so
/// downstream callers matching on them keep working.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The options value was absent (JSON `null`).
    #[error("Parameter \"options\" is missing.")]
    Missing,

    /// The options value was not a mapping.
    #[error("Parameter \"options\" must be an object.")]
    NotAnObject,

    /// An option key outside the recognized set was present.
    #[error("'{key}' is not a valid option.")]
    UnknownOption {
        /// The unrecognized key.
        key: String,
    },

    /// A recognized key held a value outside its enumeration.
    #[error("Value of option '{key}' = '{value}' is not valid. Valid values: {valid}.")]
    InvalidValue {
        /// The option key.
        key: String,
        /// The offending value, rendered as text.
        value: String,
        /// Comma-separated list of accepted values.
        valid: String,
    },
}

/// Errors that can occur when working with configuration files.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;
