use crate::aws::SesClient;
use crate::error::LambdaCronError;
use crate::notification::{RenderedSet, ResultPayload};
use crate::notification_channel::{rendered_template, NotificationChannel};
use crate::sqs_event::SqsMessage;
use async_trait::async_trait;
use aws_sdk_ses::error::ProvideErrorMetadata;
use aws_sdk_ses::operation::RequestId;
use aws_sdk_ses::types::{Body, Content, Destination, Message};
use std::fmt;
use tracing::{error, info};

pub const EMAIL_TEMPLATES: &[&str] = &["subject", "text", "html"];

const CHARSET: &str = "UTF-8";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub source: String,
    pub to_addresses: Vec<String>,
    pub reply_to_addresses: Option<Vec<String>>,
    pub configuration_set_name: Option<String>,
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// Failure details reported by the email service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportError {
    pub error_code: Option<String>,
    pub error_message: Option<String>,
    pub request_id: Option<String>,
    pub http_status: Option<u16>,
}

impl fmt::Display for TransportError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.error_code.as_deref().unwrap_or("Unknown"),
            self.error_message.as_deref().unwrap_or("no error message")
        )
    }
}

#[async_trait]
pub trait EmailTransport: Send + Sync {
    /// Sends one email and returns the service message id.
    async fn send_email(
        &self,
        email: &OutgoingEmail,
    ) -> Result<String, TransportError>;
}

pub struct EmailNotificationChannel<T: EmailTransport = SesClient> {
    transport: T,
    sender: String,
    recipients: Vec<String>,
    reply_to: Option<Vec<String>>,
    config_set: Option<String>,
}

impl<T: EmailTransport> EmailNotificationChannel<T> {
    pub fn new(
        transport: T,
        sender: &str,
        recipients: Vec<String>,
    ) -> Result<Self, LambdaCronError> {
        if sender.is_empty() {
            return Err(LambdaCronError::configuration("sender must be a non-empty email address"));
        }

        if recipients.is_empty() {
            return Err(LambdaCronError::configuration("recipients must contain at least one email address"));
        }

        Ok(Self {
            transport,
            sender: sender.to_string(),
            recipients,
            reply_to: None,
            config_set: None,
        })
    }

    pub fn with_reply_to(
        self,
        reply_to: Vec<String>,
    ) -> Self {
        Self {
            reply_to: Some(reply_to).filter(|addresses| !addresses.is_empty()),
            ..self
        }
    }

    pub fn with_config_set(
        self,
        config_set: Option<String>,
    ) -> Self {
        Self {
            config_set: config_set.filter(|name| !name.is_empty()),
            ..self
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn build_email(
        &self,
        rendered: &RenderedSet,
    ) -> Result<OutgoingEmail, LambdaCronError> {
        Ok(OutgoingEmail {
            source: self.sender.clone(),
            to_addresses: self.recipients.clone(),
            reply_to_addresses: self.reply_to.clone(),
            configuration_set_name: self.config_set.clone(),
            subject: rendered_template(rendered, "subject")?.to_string(),
            text: rendered_template(rendered, "text")?.to_string(),
            html: rendered_template(rendered, "html")?.to_string(),
        })
    }
}

#[async_trait]
impl<T: EmailTransport> NotificationChannel for EmailNotificationChannel<T> {
    fn template_names(&self) -> &'static [&'static str] {
        EMAIL_TEMPLATES
    }

    async fn notify(
        &self,
        _payload: &ResultPayload,
        rendered: &RenderedSet,
        _message: &SqsMessage,
    ) -> Result<(), LambdaCronError> {
        let email = self.build_email(rendered)?;

        match self.transport.send_email(&email).await {
            Ok(message_id) => {
                info!(message_id = %message_id, "ses_email_sent");
                Ok(())
            },
            Err(transport_error) => {
                error!(
                    error_code = transport_error.error_code.as_deref(),
                    error_message = transport_error.error_message.as_deref(),
                    request_id = transport_error.request_id.as_deref(),
                    http_status = transport_error.http_status,
                    "ses_email_failed"
                );
                Err(LambdaCronError::delivery(&transport_error.to_string(), "Failed to send email"))
            },
        }
    }
}

#[async_trait]
impl EmailTransport for SesClient {
    async fn send_email(
        &self,
        email: &OutgoingEmail,
    ) -> Result<String, TransportError> {
        let message = Message::builder()
            .subject(content(&email.subject)?)
            .body(Body::builder().text(content(&email.text)?).html(content(&email.html)?).build())
            .build();

        let destination = Destination::builder().set_to_addresses(Some(email.to_addresses.clone())).build();

        let output = self
            .client
            .send_email()
            .source(&email.source)
            .destination(destination)
            .message(message)
            .set_reply_to_addresses(email.reply_to_addresses.clone())
            .set_configuration_set_name(email.configuration_set_name.clone())
            .send()
            .await
            .map_err(|error| TransportError {
                error_code: error.code().map(str::to_string),
                error_message: error.message().map(str::to_string).or_else(|| Some(error.to_string())),
                request_id: error.request_id().map(str::to_string),
                http_status: error.raw_response().map(|response| response.status().as_u16()),
            })?;

        Ok(output.message_id().to_string())
    }
}

fn content(data: &str) -> Result<Content, TransportError> {
    Content::builder().data(data).charset(CHARSET).build().map_err(|error| TransportError {
        error_message: Some(error.to_string()),
        ..Default::default()
    })
}
