use crate::error::LambdaCronError;
use crate::notification::{RenderedSet, ResultPayload};
use crate::sqs_event::SqsMessage;
use async_trait::async_trait;

/// Delivery target of rendered notifications.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    /// Names of the templates this channel renders, resolved once per batch.
    fn template_names(&self) -> &'static [&'static str];

    async fn notify(
        &self,
        payload: &ResultPayload,
        rendered: &RenderedSet,
        message: &SqsMessage,
    ) -> Result<(), LambdaCronError>;
}

pub(crate) fn rendered_template<'a>(
    rendered: &'a RenderedSet,
    name: &str,
) -> Result<&'a str, LambdaCronError> {
    rendered
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| LambdaCronError::delivery(&format!("Rendered template {name} is missing"), "Failed to build notification"))
}
