use async_trait::async_trait;
use lambdacron::cron_task::{CronTask, InvocationContext, TaskResults};
use lambdacron::error::LambdaCronError;
use serde_json::{json, Value};

/// Publishes a fixed greeting under the `example` topic key.
pub struct ExampleTask;

#[async_trait]
impl CronTask for ExampleTask {
    async fn perform(
        &self,
        _event: &Value,
        _context: &InvocationContext,
    ) -> Result<TaskResults, LambdaCronError> {
        Ok(TaskResults::from([("example".to_string(), json!({"message": "Hello World"}))]))
    }
}
