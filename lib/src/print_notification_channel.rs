use crate::error::LambdaCronError;
use crate::notification::{RenderedSet, ResultPayload};
use crate::notification_channel::{rendered_template, NotificationChannel};
use crate::sqs_event::SqsMessage;
use async_trait::async_trait;
use std::io::Write;
use std::sync::Mutex;

pub const PRINT_TEMPLATES: &[&str] = &["body"];

/// Writes the rendered `body` template, one line per notification. Used for testing pipelines.
pub struct PrintNotificationChannel {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl Default for PrintNotificationChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl PrintNotificationChannel {
    pub fn new() -> Self {
        Self::with_writer(std::io::stdout())
    }

    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

#[async_trait]
impl NotificationChannel for PrintNotificationChannel {
    fn template_names(&self) -> &'static [&'static str] {
        PRINT_TEMPLATES
    }

    async fn notify(
        &self,
        _payload: &ResultPayload,
        rendered: &RenderedSet,
        _message: &SqsMessage,
    ) -> Result<(), LambdaCronError> {
        let body = rendered_template(rendered, "body")?;

        let mut writer = self.writer.lock().map_err(|error| LambdaCronError::delivery(&error.to_string(), "Print writer lock poisoned"))?;

        writeln!(writer, "{body}")
            .and_then(|_| writer.flush())
            .map_err(|error| LambdaCronError::delivery(&error.to_string(), "Failed to print notification"))
    }
}
