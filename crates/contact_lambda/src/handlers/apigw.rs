use std::collections::BTreeMap;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use contact_core::contract::MessageResponse;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

/// The subset of an API Gateway HTTP API (payload v2) event the handlers use.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayRequest {
    #[serde(default)]
    pub body: Option<Value>,
    #[serde(default)]
    pub is_base64_encoded: bool,
    #[serde(default)]
    pub path_parameters: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub request_context: Option<RequestContext>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RequestContext {
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub http: Option<HttpDescription>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct HttpDescription {
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}

impl ApiGatewayRequest {
    pub fn stage(&self) -> Option<&str> {
        self.request_context.as_ref()?.stage.as_deref()
    }

    pub fn method(&self) -> Option<&str> {
        self.request_context.as_ref()?.http.as_ref()?.method.as_deref()
    }

    pub fn path_parameter(&self, name: &str) -> Option<&str> {
        self.path_parameters.as_ref()?.get(name).map(String::as_str)
    }

    /// Decodes the body as JSON. A string body is parsed (after base64
    /// decoding when flagged); an embedded object from a direct invocation is
    /// used as is. A missing body parses as empty input and fails.
    pub fn json_body(&self) -> Result<Value, String> {
        match &self.body {
            None | Some(Value::Null) => parse_json_text(b""),
            Some(Value::String(text)) if self.is_base64_encoded => {
                let bytes = BASE64
                    .decode(text)
                    .map_err(|error| format!("Malformed base64 body: {error}"))?;
                parse_json_text(&bytes)
            }
            Some(Value::String(text)) => parse_json_text(text.as_bytes()),
            Some(other) => Ok(other.clone()),
        }
    }
}

fn parse_json_text(bytes: &[u8]) -> Result<Value, String> {
    serde_json::from_slice(bytes).map_err(|error| error.to_string())
}

pub fn decode_event(event: Value) -> Result<ApiGatewayRequest, String> {
    if !event.is_object() {
        return Err("Request payload must be a JSON object".to_string());
    }
    serde_json::from_value(event).map_err(|error| format!("Malformed request event: {error}"))
}

/// `{"message": ...}` with a JSON content type.
pub fn message_response(status_code: u16, message: &str) -> ApiGatewayResponse {
    json_response(status_code, MessageResponse::new(message))
}

pub fn json_response(status_code: u16, payload: impl Serialize) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        headers: json!({"Content-Type": "application/json"}),
        body: serde_json::to_string(&payload).expect("response payload should serialize"),
    }
}

pub fn text_response(status_code: u16, text: &str) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        headers: json!({"Content-Type": "text/plain; charset=utf-8"}),
        body: text.to_string(),
    }
}
