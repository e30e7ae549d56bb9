use std::cell::RefCell;

use contact_core::message::OutboundMessage;
use contact_lambda::adapters::mail_sender::MailSender;
use contact_lambda::adapters::parameter_store::ParameterStore;
use contact_lambda::handlers::contact::{handle_contact_event, ContactHandlerConfig};
use serde_json::{json, Value};

struct CannedParameterStore(Result<&'static str, &'static str>);

impl ParameterStore for CannedParameterStore {
    fn get_parameter(&self, _name: &str) -> Result<String, String> {
        self.0.map(str::to_string).map_err(str::to_string)
    }
}

#[derive(Default)]
struct OutboxMailSender {
    sent: RefCell<Vec<OutboundMessage>>,
}

impl MailSender for OutboxMailSender {
    fn send_email(&self, message: &OutboundMessage) -> Result<(), String> {
        self.sent.borrow_mut().push(message.clone());
        Ok(())
    }
}

fn api_gateway_event(body: &str) -> Value {
    json!({
        "version": "2.0",
        "routeKey": "POST /contact",
        "rawPath": "/prod/contact",
        "headers": {"content-type": "application/json"},
        "requestContext": {
            "stage": "prod",
            "http": {"method": "POST", "path": "/prod/contact"}
        },
        "body": body,
        "isBase64Encoded": false
    })
}

const VALID_BODY: &str = r#"{"email":"a@b.com","subject":"Hi","message":"Hello","app_version":"android 2.0.0+10"}"#;

#[test]
fn valid_submission_is_sent() {
    let sender = OutboxMailSender::default();

    let response = handle_contact_event(
        api_gateway_event(VALID_BODY),
        &ContactHandlerConfig::default(),
        &CannedParameterStore(Ok("ops@svc.com")),
        &sender,
    );

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, r#"{"message":"message sent successfully"}"#);

    let sent = sender.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].recipients.contains("ops@svc.com"));
    assert_eq!(sent[0].recipients.len(), 1);
    assert_eq!(sent[0].subject.data, "Hi");
}

#[test]
fn resolver_failure_returns_its_text() {
    let sender = OutboxMailSender::default();

    let response = handle_contact_event(
        api_gateway_event(VALID_BODY),
        &ContactHandlerConfig::default(),
        &CannedParameterStore(Err("ParameterNotFound")),
        &sender,
    );

    assert_eq!(response.status_code, 400);
    assert_eq!(response.body, "ParameterNotFound");
    assert!(sender.sent.borrow().is_empty());
}

#[test]
fn invalid_client_tag_is_rejected() {
    let sender = OutboxMailSender::default();
    let body = r#"{"email":"a@b.com","subject":"Hi","message":"Hello","app_version":"ios 1.2.3"}"#;

    let response = handle_contact_event(
        api_gateway_event(body),
        &ContactHandlerConfig::default(),
        &CannedParameterStore(Ok("ops@svc.com")),
        &sender,
    );

    assert_eq!(response.status_code, 400);
    assert_eq!(response.body, "ios 1.2.3 app version is not correct");
}

#[test]
fn malformed_email_is_rejected() {
    let sender = OutboxMailSender::default();
    let body = r#"{"email":"not-an-email","subject":"Hi","message":"Hello","app_version":"ios 1.2.3+4"}"#;

    let response = handle_contact_event(
        api_gateway_event(body),
        &ContactHandlerConfig::default(),
        &CannedParameterStore(Ok("ops@svc.com")),
        &sender,
    );

    assert_eq!(response.status_code, 400);
    assert!(!response.body.is_empty());
    assert!(sender.sent.borrow().is_empty());
}
