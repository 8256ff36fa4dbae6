use crate::environment::Environment;
use crate::error::LambdaCronError;
use crate::sns_publisher::{ResultNotification, TopicPublisher};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{info, info_span, Instrument, Span};

pub const DEFAULT_MESSAGE_GROUP_ID: &str = "cloudcron";

/// Task results keyed by topic key.
pub type TaskResults = BTreeMap<String, Value>;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct InvocationContext {
    pub aws_request_id: Option<String>,
    pub function_name: Option<String>,
}

/// Work executed on a schedule. Each returned key must name a configured topic.
#[async_trait]
pub trait CronTask: Send + Sync {
    async fn perform(
        &self,
        event: &Value,
        context: &InvocationContext,
    ) -> Result<TaskResults, LambdaCronError>;
}

pub struct CronTaskRunner<T: CronTask, P: TopicPublisher> {
    task: T,
    publisher: P,
    sns_topics: BTreeMap<String, String>,
    message_group_id: String,
    span: Span,
}

impl<T: CronTask, P: TopicPublisher> CronTaskRunner<T, P> {
    pub fn new(
        task: T,
        publisher: P,
        sns_topics: BTreeMap<String, String>,
    ) -> Self {
        Self {
            task,
            publisher,
            sns_topics,
            message_group_id: DEFAULT_MESSAGE_GROUP_ID.to_string(),
            span: info_span!("cron_task"),
        }
    }

    /// Topics from `SNS_TOPICS` and the group id from `SNS_MESSAGE_GROUP_ID`.
    pub fn from_env(
        task: T,
        publisher: P,
    ) -> Result<Self, LambdaCronError> {
        let sns_topics = Environment::json_string_map("SNS_TOPICS")?;
        let message_group_id = Environment::string("SNS_MESSAGE_GROUP_ID", DEFAULT_MESSAGE_GROUP_ID);

        Ok(Self::new(task, publisher, sns_topics).with_message_group_id(&message_group_id))
    }

    pub fn with_message_group_id(
        self,
        message_group_id: &str,
    ) -> Self {
        Self {
            message_group_id: message_group_id.to_string(),
            ..self
        }
    }

    pub fn with_span(
        self,
        span: Span,
    ) -> Self {
        Self { span, ..self }
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    pub async fn run(
        &self,
        event: &Value,
        context: &InvocationContext,
    ) -> Result<(), LambdaCronError> {
        let span = self.span.clone();

        async move {
            info!(
                event = %event,
                aws_request_id = context.aws_request_id.as_deref(),
                function_name = context.function_name.as_deref(),
                "lambda_invocation"
            );

            let results = self.task.perform(event, context).await?;

            validate_results(&results, &self.sns_topics)?;

            dispatch(&self.publisher, &results, &self.sns_topics, &self.message_group_id).await
        }
        .instrument(span)
        .await
    }
}

/// Fails when a result key has no configured topic.
pub fn validate_results(
    results: &TaskResults,
    sns_topics: &BTreeMap<String, String>,
) -> Result<(), LambdaCronError> {
    let unknown = results.keys().filter(|key| !sns_topics.contains_key(*key)).cloned().collect::<Vec<_>>();

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(LambdaCronError::configuration(&format!("Result keys have no configured SNS topic: {}", unknown.join(", "))))
    }
}

pub async fn dispatch<P: TopicPublisher>(
    publisher: &P,
    results: &TaskResults,
    sns_topics: &BTreeMap<String, String>,
    message_group_id: &str,
) -> Result<(), LambdaCronError> {
    for (result_type, message) in results {
        let topic_arn = sns_topics
            .get(result_type)
            .ok_or_else(|| LambdaCronError::configuration(&format!("No SNS topic configured for {result_type}")))?;

        let notification = ResultNotification {
            topic_arn: topic_arn.clone(),
            message: message.to_string(),
            subject: format!("Notification for {result_type}"),
            result_type: result_type.clone(),
            message_group_id: message_group_id.to_string(),
        };

        publisher.publish(&notification).await?;

        info!(result_type = %result_type, topic_arn = %topic_arn, "sns_publish");
    }

    Ok(())
}
