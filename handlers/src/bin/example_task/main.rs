use aws_config::BehaviorVersion;
use lambdacron::aws::SnsClient;
use lambdacron::cron_task::CronTaskRunner;
use lambdacron_handlers::example_task::ExampleTask;
use lambdacron_handlers::{invocation, telemetry};
use serde_json::Value;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _guard = telemetry::init();

    info!("Starting example task...");

    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let sns_client = SnsClient::new(&aws_config);

    let runner = CronTaskRunner::from_env(ExampleTask, sns_client)?;

    let event: Value = invocation::read_event().await?;
    runner.run(&event, &invocation::context_from_env()).await?;

    info!("Example task finished");

    Ok(())
}
