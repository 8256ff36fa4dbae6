use lambdacron::environment::Environment;
use lambdacron::error::LambdaCronError;

/// Settings shared by every SQS notification handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifierConfig {
    pub expected_queue_arn: Option<String>,
    pub include_result_type: bool,
}

impl NotifierConfig {
    pub fn from_env() -> Result<Self, LambdaCronError> {
        Ok(Self {
            expected_queue_arn: Environment::optional_string("EXPECTED_QUEUE_ARN"),
            include_result_type: Environment::boolean("INCLUDE_RESULT_TYPE", true)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub sender: String,
    pub recipients: Vec<String>,
    pub reply_to: Vec<String>,
    pub config_set: Option<String>,
}

impl EmailConfig {
    pub fn from_env() -> Result<Self, LambdaCronError> {
        Ok(Self {
            sender: Environment::required_string("EMAIL_SENDER")?,
            recipients: Environment::json_string_list("EMAIL_RECIPIENTS", true)?,
            reply_to: Environment::json_string_list("EMAIL_REPLY_TO", false)?,
            config_set: Environment::optional_string("EMAIL_CONFIG_SET"),
        })
    }
}
