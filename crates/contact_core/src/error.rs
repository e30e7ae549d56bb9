use thiserror::Error;

use crate::validation::ValidationError;

/// Failure to obtain the contact address from the parameter store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0}")]
    Lookup(String),
    #[error("no email value")]
    MissingValue { parameter_name: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("{0}")]
    MalformedRequest(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Send(String),
}

impl ContactError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedRequest(_) => "malformed_request",
            Self::Validation(_) => "validation_error",
            Self::Config(_) => "configuration_error",
            Self::Send(_) => "send_failed",
        }
    }

    /// Every category is reported to callers as a bad request.
    pub fn status_code(&self) -> u16 {
        400
    }
}
