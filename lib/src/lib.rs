pub mod aws;
pub mod batch_response;
pub mod cron_task;
pub mod email_notification_channel;
pub mod envelope;
pub mod environment;
pub mod error;
pub mod notification;
pub mod notification_channel;
pub mod notification_processor;
pub mod print_notification_channel;
pub mod record_validator;
pub mod sns_publisher;
pub mod sqs_event;
pub mod template_provider;
pub mod template_renderer;
