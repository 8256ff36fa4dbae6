use aws_config::BehaviorVersion;
use lambdacron::aws::SesClient;
use lambdacron::sqs_event::SqsEvent;
use lambdacron_handlers::config::{EmailConfig, NotifierConfig};
use lambdacron_handlers::{invocation, notifiers, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _guard = telemetry::init();

    info!("Starting email notifier...");

    let notifier_config = NotifierConfig::from_env()?;
    let email_config = EmailConfig::from_env()?;

    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let ses_client = SesClient::new(&aws_config);

    let processor = notifiers::email_processor(&notifier_config, email_config, ses_client)?;

    let event: SqsEvent = invocation::read_event().await?;
    let response = processor.handle(&event).await?;

    invocation::write_response(&response).await?;

    info!("Email notifier finished");

    Ok(())
}
