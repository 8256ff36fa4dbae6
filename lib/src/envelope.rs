use crate::error::{ErrorKind, LambdaCronError};
use crate::notification::ResultPayload;
use crate::sqs_event::SqsMessage;
use serde_json::Value;

pub const RESULT_TYPE_KEY: &str = "result_type";

const SNS_MESSAGE_KEY: &str = "Message";

#[derive(Debug, Clone)]
pub struct EnvelopeParser {
    include_result_type: bool,
}

impl Default for EnvelopeParser {
    fn default() -> Self {
        Self { include_result_type: true }
    }
}

impl EnvelopeParser {
    pub fn new(include_result_type: bool) -> Self {
        Self { include_result_type }
    }

    pub fn parse(
        &self,
        message: &SqsMessage,
    ) -> Result<ResultPayload, LambdaCronError> {
        let mut payload = parse_body(message.body.as_deref())?;

        if self.include_result_type && !payload.contains_key(RESULT_TYPE_KEY) {
            if let Some(result_type) = message.string_attribute(RESULT_TYPE_KEY) {
                payload.insert(RESULT_TYPE_KEY.to_string(), Value::String(result_type.to_string()));
            }
        }

        Ok(payload)
    }
}

pub fn parse_body(body: Option<&str>) -> Result<ResultPayload, LambdaCronError> {
    let outer = unwrap_outer(body)?;
    let inner = unwrap_inner(outer)?;

    match inner {
        Value::Object(payload) => Ok(payload),
        _ => Err(LambdaCronError::parse("Result payload must be a JSON object")),
    }
}

/// Decodes the SQS record body.
pub fn unwrap_outer(body: Option<&str>) -> Result<Value, LambdaCronError> {
    let body = body.filter(|body| !body.is_empty()).ok_or_else(|| LambdaCronError::parse("SQS record body is missing"))?;

    serde_json::from_str(body).map_err(|error| LambdaCronError::new(ErrorKind::Parse, &error.to_string(), "SQS record body must be valid JSON"))
}

/// Unwraps an SNS notification envelope when the value carries a `Message` field. Any other value passes through.
pub fn unwrap_inner(value: Value) -> Result<Value, LambdaCronError> {
    match value {
        Value::Object(mut envelope) if envelope.contains_key(SNS_MESSAGE_KEY) => match envelope.remove(SNS_MESSAGE_KEY) {
            Some(Value::String(message)) => {
                serde_json::from_str(&message).map_err(|error| LambdaCronError::new(ErrorKind::Parse, &error.to_string(), "SNS message must be valid JSON"))
            },
            _ => Err(LambdaCronError::parse("SNS message must be a JSON string")),
        },
        other => Ok(other),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_pass_through_bare_payload() {
        let value = unwrap_outer(Some(r#"{"status":"ok"}"#)).unwrap();
        assert_eq!(json!({"status": "ok"}), unwrap_inner(value).unwrap());
    }

    #[test]
    fn should_unwrap_sns_envelope_to_same_payload() {
        let envelope = json!({"Type": "Notification", "Message": "{\"status\":\"ok\"}"}).to_string();

        let wrapped = parse_body(Some(&envelope)).unwrap();
        let bare = parse_body(Some(r#"{"status":"ok"}"#)).unwrap();

        assert_eq!(bare, wrapped);
    }

    #[test]
    fn should_reject_empty_body() {
        assert_eq!(ErrorKind::Parse, unwrap_outer(Some("")).unwrap_err().kind);
        assert_eq!(ErrorKind::Parse, unwrap_outer(None).unwrap_err().kind);
    }

    #[test]
    fn should_reject_non_string_sns_message() {
        let error = unwrap_inner(json!({"Message": {"status": "ok"}})).unwrap_err();
        assert_eq!("SNS message must be a JSON string", error.cause);
    }

    #[test]
    fn should_reject_null_sns_message() {
        assert!(unwrap_inner(json!({"Message": null})).is_err());
    }

    #[test]
    fn should_reject_invalid_sns_message_json() {
        let error = unwrap_inner(json!({"Message": "{bad"})).unwrap_err();
        assert_eq!(ErrorKind::Parse, error.kind);
        assert_eq!(Some("SNS message must be valid JSON".to_string()), error.message);
    }

    #[test]
    fn should_reject_non_object_payloads() {
        for body in [r#"["not","an","object"]"#, r#""text""#, "42", "null", "true", r#"{"Message":"[1,2]"}"#] {
            let error = parse_body(Some(body)).unwrap_err();
            assert_eq!("Result payload must be a JSON object", error.cause, "body {body}");
        }
    }
}
