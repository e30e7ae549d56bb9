use contact_core::client_tag::ClientTag;
use contact_core::contract::{ContactRequest, SUCCESS_MESSAGE};
use contact_core::error::ContactError;
use contact_core::message::assemble_message;
use contact_core::parameters::{resolve_stage, DEFAULT_PARAMETER_NAMESPACE};
use contact_core::validation::validate_request;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::adapters::mail_sender::MailSender;
use crate::adapters::parameter_store::{resolve_contact_address, ParameterStore};
use crate::handlers::apigw::{
    decode_event, message_response, text_response, ApiGatewayRequest, ApiGatewayResponse,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactHandlerConfig {
    pub parameter_namespace: String,
}

impl Default for ContactHandlerConfig {
    fn default() -> Self {
        Self {
            parameter_namespace: DEFAULT_PARAMETER_NAMESPACE.to_string(),
        }
    }
}

/// Runs one contact submission end to end and maps the outcome to a
/// response: 200 with a JSON message on success, otherwise the status of the
/// failure with its text as a plain body.
pub fn handle_contact_event(
    event: Value,
    config: &ContactHandlerConfig,
    parameter_store: &dyn ParameterStore,
    mail_sender: &dyn MailSender,
) -> ApiGatewayResponse {
    match send_contact_message(event, config, parameter_store, mail_sender) {
        Ok(()) => message_response(200, SUCCESS_MESSAGE),
        Err(failure) => {
            log_rejection(&failure);
            text_response(failure.status_code(), &failure.to_string())
        }
    }
}

pub fn send_contact_message(
    event: Value,
    config: &ContactHandlerConfig,
    parameter_store: &dyn ParameterStore,
    mail_sender: &dyn MailSender,
) -> Result<(), ContactError> {
    let request = decode_event(event).map_err(ContactError::MalformedRequest)?;
    let contact = parse_contact_request(&request)?;

    validate_request(&contact)?;

    let stage = resolve_stage(request.stage());
    let recipient =
        resolve_contact_address(parameter_store, &config.parameter_namespace, stage)?;

    let message = assemble_message(&contact, &recipient);
    mail_sender
        .send_email(&message)
        .map_err(ContactError::Send)?;

    let platform = ClientTag::parse(&contact.client_tag).map(|tag| tag.platform.as_str());
    info!(stage, platform, "contact_sent");
    Ok(())
}

fn parse_contact_request(request: &ApiGatewayRequest) -> Result<ContactRequest, ContactError> {
    let body = request.json_body().map_err(ContactError::MalformedRequest)?;
    serde_json::from_value(body).map_err(|error| ContactError::MalformedRequest(error.to_string()))
}

fn log_rejection(failure: &ContactError) {
    match failure {
        ContactError::MalformedRequest(_) | ContactError::Validation(_) => {
            warn!(error_kind = failure.kind(), error = %failure, "contact_rejected");
        }
        ContactError::Config(_) | ContactError::Send(_) => {
            error!(error_kind = failure.kind(), error = %failure, "contact_failed");
        }
    }
}
