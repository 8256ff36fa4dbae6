pub mod config;
pub mod example_task;
pub mod invocation;
pub mod notifiers;
pub mod telemetry;
