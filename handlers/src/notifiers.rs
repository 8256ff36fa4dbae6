use crate::config::{EmailConfig, NotifierConfig};
use lambdacron::email_notification_channel::{EmailNotificationChannel, EmailTransport};
use lambdacron::error::LambdaCronError;
use lambdacron::notification_processor::NotificationProcessor;
use lambdacron::print_notification_channel::PrintNotificationChannel;
use lambdacron::template_provider::EnvVarTemplateProvider;
use tracing::info_span;

/// Email pipeline reading its templates from `EMAIL_SUBJECT_TEMPLATE`, `EMAIL_TEXT_TEMPLATE` and `EMAIL_HTML_TEMPLATE`.
pub fn email_processor<T: EmailTransport>(
    notifier_config: &NotifierConfig,
    email_config: EmailConfig,
    transport: T,
) -> Result<NotificationProcessor<EmailNotificationChannel<T>>, LambdaCronError> {
    let channel = EmailNotificationChannel::new(transport, &email_config.sender, email_config.recipients)?
        .with_reply_to(email_config.reply_to)
        .with_config_set(email_config.config_set);

    Ok(NotificationProcessor::new(EnvVarTemplateProvider::email(), channel)
        .with_expected_queue_arn(notifier_config.expected_queue_arn.clone())
        .with_include_result_type(notifier_config.include_result_type)
        .with_span(info_span!("email_notifier")))
}

/// Print channel for the `print_notifier` binary. Bodies go to stderr because stdout carries the batch response.
pub fn stderr_print_channel() -> PrintNotificationChannel {
    PrintNotificationChannel::with_writer(std::io::stderr())
}

/// Print pipeline reading its template from `TEMPLATE`.
pub fn print_processor(
    notifier_config: &NotifierConfig,
    channel: PrintNotificationChannel,
) -> NotificationProcessor<PrintNotificationChannel> {
    NotificationProcessor::new(EnvVarTemplateProvider::body(), channel)
        .with_expected_queue_arn(notifier_config.expected_queue_arn.clone())
        .with_include_result_type(notifier_config.include_result_type)
        .with_span(info_span!("print_notifier"))
}
