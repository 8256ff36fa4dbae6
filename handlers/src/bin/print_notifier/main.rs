use lambdacron::sqs_event::SqsEvent;
use lambdacron_handlers::config::NotifierConfig;
use lambdacron_handlers::{invocation, notifiers, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _guard = telemetry::init();

    info!("Starting print notifier...");

    let notifier_config = NotifierConfig::from_env()?;
    let processor = notifiers::print_processor(&notifier_config, notifiers::stderr_print_channel());

    let event: SqsEvent = invocation::read_event().await?;
    let response = processor.handle(&event).await?;

    invocation::write_response(&response).await?;

    info!("Print notifier finished");

    Ok(())
}
