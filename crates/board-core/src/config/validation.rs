use thiserror::Error;

use super::CountRange;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for field '{field}': '{value}'. Expected: {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },

    #[error("Configuration validation failed: {message}")]
    ValidationFailed { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ConfigError {
    pub fn invalid_value(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }

    pub fn validation_failed(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }
}

/// Reject a range whose lower bound exceeds its upper bound
pub fn validate_range(field: &str, range: &CountRange) -> Result<(), ConfigError> {
    if range.min > range.max {
        return Err(ConfigError::validation_failed(format!(
            "{}: min ({}) is greater than max ({})",
            field, range.min, range.max
        )));
    }
    Ok(())
}
