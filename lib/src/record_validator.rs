use crate::error::LambdaCronError;
use crate::sqs_event::{SqsMessage, SQS_EVENT_SOURCE};

#[derive(Debug, Clone, Default)]
pub struct RecordValidator {
    expected_queue_arn: Option<String>,
}

impl RecordValidator {
    pub fn new(expected_queue_arn: Option<String>) -> Self {
        Self {
            expected_queue_arn: expected_queue_arn.filter(|arn| !arn.is_empty()),
        }
    }

    pub fn validate(
        &self,
        message: &SqsMessage,
    ) -> Result<(), LambdaCronError> {
        if let Some(event_source) = message.event_source.as_deref().filter(|source| !source.is_empty()) {
            if event_source != SQS_EVENT_SOURCE {
                return Err(LambdaCronError::provenance(&format!("Unsupported event source: {event_source}")));
            }
        }

        if let Some(expected_queue_arn) = &self.expected_queue_arn {
            let event_source_arn = message.event_source_arn.as_deref().unwrap_or_default();
            if event_source_arn != expected_queue_arn.as_str() {
                return Err(LambdaCronError::provenance(&format!(
                    "SQS queue mismatch (expected {expected_queue_arn}, got {event_source_arn})"
                )));
            }
        }

        Ok(())
    }
}
