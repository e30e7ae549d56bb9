use aws_sdk_ses::types::{Body, Content, Destination, Message};
use contact_core::message::{MessageContent, OutboundMessage};
use contact_core::parameters::DEFAULT_PARAMETER_NAMESPACE;
use contact_lambda::adapters::mail_sender::MailSender;
use contact_lambda::adapters::parameter_store::ParameterStore;
use contact_lambda::handlers::apigw::ApiGatewayResponse;
use contact_lambda::handlers::contact::{handle_contact_event, ContactHandlerConfig};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

struct SsmParameterStore {
    ssm_client: aws_sdk_ssm::Client,
}

impl ParameterStore for SsmParameterStore {
    fn get_parameter(&self, name: &str) -> Result<String, String> {
        let parameter_name = name.to_string();
        let client = self.ssm_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .get_parameter()
                    .name(parameter_name)
                    .send()
                    .await
                    .map(|output| {
                        output
                            .parameter()
                            .and_then(|parameter| parameter.value())
                            .unwrap_or_default()
                            .to_string()
                    })
                    .map_err(|error| aws_sdk_ssm::error::DisplayErrorContext(&error).to_string())
            })
        })
    }
}

struct SesMailSender {
    ses_client: aws_sdk_ses::Client,
}

impl MailSender for SesMailSender {
    fn send_email(&self, message: &OutboundMessage) -> Result<(), String> {
        let destination = Destination::builder()
            .set_to_addresses(Some(message.recipients.iter().cloned().collect()))
            .build();
        let ses_message = Message::builder()
            .subject(ses_content(&message.subject)?)
            .body(Body::builder().text(ses_content(&message.body)?).build())
            .build();
        let source = message.sender.clone();
        let reply_to = message.reply_to.clone();
        let client = self.ses_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .send_email()
                    .source(source)
                    .destination(destination)
                    .message(ses_message)
                    .reply_to_addresses(reply_to)
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| aws_sdk_ses::error::DisplayErrorContext(&error).to_string())
            })
        })
    }
}

fn ses_content(content: &MessageContent) -> Result<Content, String> {
    Content::builder()
        .data(content.data.clone())
        .charset(content.charset)
        .build()
        .map_err(|error| format!("failed to build email content: {error}"))
}

struct RuntimeDependencies {
    config: ContactHandlerConfig,
    parameter_store: SsmParameterStore,
    mail_sender: SesMailSender,
}

async fn handle_request(
    deps: &RuntimeDependencies,
    event: LambdaEvent<Value>,
) -> Result<ApiGatewayResponse, Error> {
    Ok(handle_contact_event(
        event.payload,
        &deps.config,
        &deps.parameter_store,
        &deps.mail_sender,
    ))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    // Clients are built once per process and shared by every invocation.
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let deps = RuntimeDependencies {
        config: ContactHandlerConfig {
            parameter_namespace: std::env::var("CONTACT_PARAMETER_NAMESPACE")
                .unwrap_or_else(|_| DEFAULT_PARAMETER_NAMESPACE.to_string()),
        },
        parameter_store: SsmParameterStore {
            ssm_client: aws_sdk_ssm::Client::new(&aws_config),
        },
        mail_sender: SesMailSender {
            ses_client: aws_sdk_ses::Client::new(&aws_config),
        },
    };

    lambda_runtime::run(service_fn(|event| handle_request(&deps, event))).await
}
