use crate::aws::SnsClient;
use crate::error::LambdaCronError;
use async_trait::async_trait;
use aws_sdk_sns::error::ProvideErrorMetadata;
use aws_sdk_sns::types::MessageAttributeValue;

pub const RESULT_TYPE_ATTRIBUTE: &str = "result_type";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultNotification {
    pub topic_arn: String,
    pub message: String,
    pub subject: String,
    pub result_type: String,
    pub message_group_id: String,
}

#[async_trait]
pub trait TopicPublisher: Send + Sync {
    async fn publish(
        &self,
        notification: &ResultNotification,
    ) -> Result<(), LambdaCronError>;
}

#[async_trait]
impl TopicPublisher for SnsClient {
    async fn publish(
        &self,
        notification: &ResultNotification,
    ) -> Result<(), LambdaCronError> {
        let result_type = MessageAttributeValue::builder().data_type("String").string_value(&notification.result_type).build().map_err(|error| {
            LambdaCronError::publish(
                &error.to_string(),
                &format!("Failed to create message attribute with value={}", notification.result_type),
            )
        })?;

        self.client
            .publish()
            .topic_arn(&notification.topic_arn)
            .message(&notification.message)
            .subject(&notification.subject)
            .message_attributes(RESULT_TYPE_ATTRIBUTE, result_type)
            .message_group_id(&notification.message_group_id)
            .send()
            .await
            .map_err(|error| {
                let body = error
                    .raw_response()
                    .map(|rr| rr.body())
                    .map(|body| {
                        if let Some(bytes) = body.bytes() {
                            String::from_utf8(bytes.to_vec()).ok().unwrap_or(String::from("Unknown: Failed to convert bytes to string"))
                        } else {
                            String::from("Unknown: None bytes")
                        }
                    })
                    .unwrap_or(String::from("Unknown"));

                LambdaCronError::publish(&body, error.message().unwrap_or("Failed to publish sns message"))
            })?;

        Ok(())
    }
}
