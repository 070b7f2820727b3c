//! Error types for configuration handling.
//!
//! The simulation core itself cannot fail; only reading, writing and validating
//! parameter files can.

use thiserror::Error;

/// Errors raised while loading, saving or validating [`super::params::Params`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File system errors
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A parameter value outside its allowed domain
    #[error("Invalid parameter `{field}`: {reason}")]
    Invalid {
        /// Name of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

impl ConfigError {
    /// Creates a new validation error for `field`.
    #[must_use]
    pub fn invalid<S: Into<String>>(field: &'static str, reason: S) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::invalid("world_width", "must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid parameter `world_width`: must be positive"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ConfigError = io_err.into();
        assert!(matches!(err, ConfigError::FileSystem(_)));
    }
}
