use lambdacron::cron_task::InvocationContext;
use lambdacron::environment::Environment;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Parses an event document. Blank input reads as `null`.
pub fn parse_event<T: DeserializeOwned>(raw: &str) -> Result<T, serde_json::Error> {
    if raw.trim().is_empty() {
        serde_json::from_str("null")
    } else {
        serde_json::from_str(raw)
    }
}

pub async fn read_event<T: DeserializeOwned>() -> Result<T, Box<dyn std::error::Error>> {
    let mut raw = String::new();
    tokio::io::stdin().read_to_string(&mut raw).await?;

    Ok(parse_event(&raw)?)
}

/// Writes the response to stdout. Nothing else may write to stdout, so it stays a single JSON document.
pub async fn write_response<T: Serialize>(response: &T) -> Result<(), Box<dyn std::error::Error>> {
    write_response_to(&mut tokio::io::stdout(), response).await
}

pub async fn write_response_to<W: AsyncWrite + Unpin, T: Serialize>(
    writer: &mut W,
    response: &T,
) -> Result<(), Box<dyn std::error::Error>> {
    writer.write_all(serde_json::to_string(response)?.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;

    Ok(())
}

pub fn context_from_env() -> InvocationContext {
    InvocationContext {
        aws_request_id: Environment::optional_string("AWS_REQUEST_ID"),
        function_name: Environment::optional_string("AWS_LAMBDA_FUNCTION_NAME"),
    }
}
