use lettre::message::Mailbox;
use thiserror::Error;

use crate::client_tag::is_valid_client_tag;
use crate::contract::ContactRequest;

pub const MAX_SUBJECT_LENGTH: usize = 50;
pub const MAX_MESSAGE_LENGTH: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{reason}")]
    InvalidEmail { reason: String },
    #[error("email subject is more than {} characters", MAX_SUBJECT_LENGTH)]
    SubjectTooLong,
    #[error("email message is more than {} characters", MAX_MESSAGE_LENGTH)]
    MessageTooLong,
    #[error("{value} app version is not correct")]
    InvalidClientTag { value: String },
}

impl ValidationError {
    pub fn field(&self) -> FieldKind {
        match self {
            Self::InvalidEmail { .. } => FieldKind::Email,
            Self::SubjectTooLong => FieldKind::Subject,
            Self::MessageTooLong => FieldKind::Message,
            Self::InvalidClientTag { .. } => FieldKind::ClientTag,
        }
    }
}

/// The fields of a contact submission, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Email,
    Subject,
    Message,
    ClientTag,
}

impl FieldKind {
    pub const ORDERED: [FieldKind; 4] = [
        Self::Email,
        Self::Subject,
        Self::Message,
        Self::ClientTag,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
            Self::ClientTag => "app",
        }
    }

    pub fn validate(self, value: &str) -> Result<(), ValidationError> {
        match self {
            Self::Email => validate_email(value),
            Self::Subject => validate_subject(value),
            Self::Message => validate_message(value),
            Self::ClientTag => validate_client_tag(value),
        }
    }

    fn value_of(self, request: &ContactRequest) -> &str {
        match self {
            Self::Email => &request.email,
            Self::Subject => &request.subject,
            Self::Message => &request.message,
            Self::ClientTag => &request.client_tag,
        }
    }
}

/// Accepts a bare address or `Display Name <address>`.
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<Mailbox>()
        .map(|_| ())
        .map_err(|error| ValidationError::InvalidEmail {
            reason: error.to_string(),
        })
}

// Limits are measured in UTF-8 bytes.
pub fn validate_subject(value: &str) -> Result<(), ValidationError> {
    if value.len() > MAX_SUBJECT_LENGTH {
        return Err(ValidationError::SubjectTooLong);
    }
    Ok(())
}

pub fn validate_message(value: &str) -> Result<(), ValidationError> {
    if value.len() > MAX_MESSAGE_LENGTH {
        return Err(ValidationError::MessageTooLong);
    }
    Ok(())
}

pub fn validate_client_tag(value: &str) -> Result<(), ValidationError> {
    if !is_valid_client_tag(value) {
        return Err(ValidationError::InvalidClientTag {
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Checks every field in [`FieldKind::ORDERED`] order and stops at the first
/// violation.
pub fn validate_request(request: &ContactRequest) -> Result<(), ValidationError> {
    for field in FieldKind::ORDERED {
        field.validate(field.value_of(request))?;
    }
    Ok(())
}
