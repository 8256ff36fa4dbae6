use lambdacron::environment::Environment;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Logs go to stderr; stdout carries the handler output.
/// Keep the returned guard alive until exit so buffered lines are flushed.
pub fn init() -> WorkerGuard {
    let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stderr());

    let rust_log = Environment::string("RUST_LOG", "INFO,aws_config=WARN,aws_smithy_runtime=WARN");

    tracing_subscriber::registry()
        .with(EnvFilter::new(rust_log))
        .with(Box::new(tracing_subscriber::fmt::layer().with_writer(non_blocking)))
        .init();

    guard
}
