use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

pub const SQS_EVENT_SOURCE: &str = "aws:sqs";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct SqsEvent {
    #[serde(rename = "Records", default)]
    pub records: Vec<SqsMessage>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SqsMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_source: Option<String>,
    #[serde(rename = "eventSourceARN", default, skip_serializing_if = "Option::is_none")]
    pub event_source_arn: Option<String>,
    #[serde(default)]
    pub message_attributes: HashMap<String, SqsMessageAttribute>,
}

impl SqsMessage {
    /// Identifier used for partial batch failure reporting. An empty id counts as absent.
    pub fn identifier(&self) -> Option<&str> {
        self.message_id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn string_attribute(
        &self,
        name: &str,
    ) -> Option<&str> {
        self.message_attributes.get(name).and_then(SqsMessageAttribute::string_value)
    }
}

/// Attribute record as delivered by SQS. The string value field is looked up without regard
/// to case since SNS raw delivery and the SQS event use different spellings.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct SqsMessageAttribute {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl SqsMessageAttribute {
    pub fn string(value: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("stringValue".to_string(), Value::String(value.to_string()));
        fields.insert("dataType".to_string(), Value::String("String".to_string()));
        Self { fields }
    }

    pub fn string_value(&self) -> Option<&str> {
        self.fields
            .iter()
            .filter(|(key, _)| key.eq_ignore_ascii_case("stringValue"))
            .find_map(|(_, value)| value.as_str().filter(|value| !value.is_empty()))
    }
}
