use crate::batch_response::BatchResponse;
use crate::envelope::EnvelopeParser;
use crate::error::LambdaCronError;
use crate::notification::TemplateSet;
use crate::notification_channel::NotificationChannel;
use crate::record_validator::RecordValidator;
use crate::sqs_event::{SqsEvent, SqsMessage};
use crate::template_provider::TemplateProvider;
use crate::template_renderer::TemplateRenderer;
use tracing::{error, info, info_span, Instrument, Span};

/// Runs SQS batches through validate, parse, render and notify, one record at a time.
///
/// Records that fail are reported by `messageId` so the queue redelivers only them. A failing
/// record without `messageId` aborts the whole batch, since its failure cannot be reported.
pub struct NotificationProcessor<C: NotificationChannel> {
    template_provider: Box<dyn TemplateProvider>,
    channel: C,
    validator: RecordValidator,
    parser: EnvelopeParser,
    renderer: TemplateRenderer,
    span: Span,
}

impl<C: NotificationChannel> NotificationProcessor<C> {
    pub fn new(
        template_provider: impl TemplateProvider + 'static,
        channel: C,
    ) -> Self {
        Self {
            template_provider: Box::new(template_provider),
            channel,
            validator: RecordValidator::default(),
            parser: EnvelopeParser::default(),
            renderer: TemplateRenderer::new(),
            span: info_span!("notification_handler"),
        }
    }

    pub fn with_expected_queue_arn(
        self,
        expected_queue_arn: Option<String>,
    ) -> Self {
        Self {
            validator: RecordValidator::new(expected_queue_arn),
            ..self
        }
    }

    pub fn with_include_result_type(
        self,
        include_result_type: bool,
    ) -> Self {
        Self {
            parser: EnvelopeParser::new(include_result_type),
            ..self
        }
    }

    pub fn with_span(
        self,
        span: Span,
    ) -> Self {
        Self { span, ..self }
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    pub async fn handle(
        &self,
        event: &SqsEvent,
    ) -> Result<BatchResponse, LambdaCronError> {
        let span = self.span.clone();

        async move {
            info!(record_count = event.records.len(), "notification_invocation");

            let failed_ids = self.process_batch(&event.records).await?;

            Ok::<_, LambdaCronError>(BatchResponse::from_failures(failed_ids))
        }
        .instrument(span)
        .await
    }

    /// Returns the ids of the records that failed, in input order.
    pub async fn process_batch(
        &self,
        messages: &[SqsMessage],
    ) -> Result<Vec<String>, LambdaCronError> {
        let templates = self.load_templates()?;

        let mut failed_ids = vec![];

        for message in messages {
            let result = self.process_message(&templates, message).instrument(self.span.clone()).await;

            if let Err(error) = result {
                let message_id = match message.identifier() {
                    Some(message_id) => message_id,
                    None => {
                        self.span.in_scope(|| error!(error = %error, "notification_record_failed_without_id"));
                        return Err(LambdaCronError::protocol_violation(&error));
                    },
                };

                self.span.in_scope(|| error!(message_id = %message_id, error = %error, "notification_record_failed"));

                failed_ids.push(message_id.to_string());
            }
        }

        Ok(failed_ids)
    }

    fn load_templates(&self) -> Result<TemplateSet, LambdaCronError> {
        self.channel
            .template_names()
            .iter()
            .map(|name| self.template_provider.resolve(name).map(|source| (name.to_string(), source)))
            .collect()
    }

    async fn process_message(
        &self,
        templates: &TemplateSet,
        message: &SqsMessage,
    ) -> Result<(), LambdaCronError> {
        self.validator.validate(message)?;

        let payload = self.parser.parse(message)?;

        let rendered = self.renderer.render(templates, &payload)?;

        self.channel.notify(&payload, &rendered, message).await
    }
}
