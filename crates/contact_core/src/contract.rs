use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const SUCCESS_MESSAGE: &str = "message sent successfully";

/// Contact form submission as posted by the mobile clients.
///
/// Absent fields decode to empty strings and are rejected later by the
/// field rules rather than by the decoder.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, rename = "app_version")]
    pub client_tag: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileResponse {
    pub message: String,
    pub data: Value,
    pub status: u16,
}

impl ProfileResponse {
    pub fn without_data(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            data: Value::String(String::new()),
            status,
        }
    }
}
