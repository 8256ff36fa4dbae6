use crate::environment::Environment;
use aws_config::{Region, SdkConfig};

pub const LOCAL_ENDPOINT: &str = "LOCAL_ENDPOINT";
pub const LOCAL_REGION: &str = "LOCAL_REGION";

/// Points the shared config at `LOCAL_ENDPOINT` (localstack and the like) when it is set.
///
/// `LOCAL_REGION` only applies together with an endpoint; without one the config is returned as is.
pub fn local_config(aws_config: &SdkConfig) -> SdkConfig {
    let Some(endpoint) = Environment::optional_string(LOCAL_ENDPOINT) else {
        return aws_config.clone();
    };

    let builder = aws_config.to_builder().endpoint_url(endpoint);

    match Environment::optional_string(LOCAL_REGION) {
        Some(region) => builder.region(Region::new(region)).build(),
        None => builder.build(),
    }
}

#[derive(Clone)]
pub struct SnsClient {
    pub client: aws_sdk_sns::Client,
}

impl SnsClient {
    pub fn new(aws_config: &SdkConfig) -> SnsClient {
        SnsClient {
            client: aws_sdk_sns::Client::new(&local_config(aws_config)),
        }
    }
}

#[derive(Clone)]
pub struct SesClient {
    pub client: aws_sdk_ses::Client,
}

impl SesClient {
    pub fn new(aws_config: &SdkConfig) -> SesClient {
        Self::from_client(aws_sdk_ses::Client::new(&local_config(aws_config)))
    }

    /// Wraps a client built elsewhere, e.g. one pointed at a mock SES server.
    pub fn from_client(client: aws_sdk_ses::Client) -> SesClient {
        SesClient { client }
    }
}
