use thiserror::Error;
use validator::ValidationErrors;
use serde_json::Error as JsonError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Error, Serialize, Deserialize, PartialEq)]
pub enum SharedError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl SharedError {
    /// The bare message, without the variant prefix added by `Display`
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(message)
            | Self::NotFound(message)
            | Self::BadRequest(message)
            | Self::InvalidEmail(message)
            | Self::UnknownPlatform(message)
            | Self::Serialization(message) => message,
        }
    }
}

impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Serialization(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_strips_variant_prefix() {
        let error = SharedError::BadRequest("Instagram not connected".to_string());
        assert_eq!(error.to_string(), "Bad request: Instagram not connected");
        assert_eq!(error.message(), "Instagram not connected");
    }

    #[test]
    fn test_from_json_error() {
        let error: SharedError = serde_json::from_str::<u64>("not a number").unwrap_err().into();
        assert!(matches!(error, SharedError::Serialization(_)));
    }
}
