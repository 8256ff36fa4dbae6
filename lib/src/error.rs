use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Provenance,
    Parse,
    Render,
    Delivery,
    ProtocolViolation,
    Publish,
}

#[derive(Debug)]
pub struct LambdaCronError {
    pub kind: ErrorKind,
    pub cause: String,
    pub message: Option<String>,
}

impl LambdaCronError {
    pub fn new(
        kind: ErrorKind,
        cause: &str,
        message: &str,
    ) -> Self {
        Self {
            kind,
            cause: cause.to_string(),
            message: Some(message.to_string()),
        }
    }

    fn bare(
        kind: ErrorKind,
        cause: &str,
    ) -> Self {
        Self {
            kind,
            cause: cause.to_string(),
            message: None,
        }
    }

    pub fn configuration(cause: &str) -> Self {
        Self::bare(ErrorKind::Configuration, cause)
    }

    pub fn provenance(cause: &str) -> Self {
        Self::bare(ErrorKind::Provenance, cause)
    }

    pub fn parse(cause: &str) -> Self {
        Self::bare(ErrorKind::Parse, cause)
    }

    pub fn render(
        cause: &str,
        message: &str,
    ) -> Self {
        Self::new(ErrorKind::Render, cause, message)
    }

    pub fn delivery(
        cause: &str,
        message: &str,
    ) -> Self {
        Self::new(ErrorKind::Delivery, cause, message)
    }

    pub fn publish(
        cause: &str,
        message: &str,
    ) -> Self {
        Self::new(ErrorKind::Publish, cause, message)
    }

    pub fn protocol_violation(error: &LambdaCronError) -> Self {
        Self::new(
            ErrorKind::ProtocolViolation,
            &error.to_string(),
            "Failed record has no messageId, partial batch failure cannot be reported",
        )
    }
}

impl std::error::Error for LambdaCronError {}

impl fmt::Display for LambdaCronError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {}", message, self.cause),
            None => write!(f, "{}", self.cause),
        }
    }
}
