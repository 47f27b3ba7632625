use thiserror::Error;

use crate::domain::types::TypeConstraintError;

#[derive(Debug, Error)]
pub enum SmartFetchError {
    #[error("Invalid filters: {0}")]
    InvalidFilters(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Encoding error: {0}")]
    Encode(String),
}

pub type SmartFetchResult<T> = Result<T, SmartFetchError>;

impl From<config::ConfigError> for SmartFetchError {
    fn from(err: config::ConfigError) -> Self {
        SmartFetchError::Config(err.to_string())
    }
}

impl From<validator::ValidationErrors> for SmartFetchError {
    fn from(err: validator::ValidationErrors) -> Self {
        SmartFetchError::Validation(err.to_string())
    }
}

impl From<serde_json::Error> for SmartFetchError {
    fn from(err: serde_json::Error) -> Self {
        SmartFetchError::InvalidFilters(format!("Serialization error: {err}"))
    }
}

impl From<TypeConstraintError> for SmartFetchError {
    fn from(val: TypeConstraintError) -> Self {
        SmartFetchError::Validation(val.to_string())
    }
}
