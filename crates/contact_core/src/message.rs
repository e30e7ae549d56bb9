use std::collections::BTreeSet;

use crate::contract::ContactRequest;

pub const CHARSET: &str = "UTF-8";
pub const BODY_SEPARATOR: &str = "  ### app version: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContent {
    pub data: String,
    pub charset: &'static str,
}

impl MessageContent {
    fn new(data: String) -> Self {
        Self {
            data,
            charset: CHARSET,
        }
    }
}

/// Plain-text email handed to the mail-send service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub sender: String,
    pub recipients: BTreeSet<String>,
    pub reply_to: String,
    pub subject: MessageContent,
    pub body: MessageContent,
}

/// Builds the outbound message for an already validated request.
///
/// The resolved address is both source and destination so the service
/// mailbox receives its own contact mail; replies go to the submitter.
pub fn assemble_message(request: &ContactRequest, resolved_address: &str) -> OutboundMessage {
    OutboundMessage {
        sender: resolved_address.to_string(),
        recipients: BTreeSet::from([resolved_address.to_string()]),
        reply_to: request.email.clone(),
        subject: MessageContent::new(request.subject.clone()),
        body: MessageContent::new(format!(
            "{}{BODY_SEPARATOR}{}",
            request.message, request.client_tag
        )),
    }
}
