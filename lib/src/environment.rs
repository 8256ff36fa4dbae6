use crate::error::LambdaCronError;
use serde_json::Value;
use std::collections::BTreeMap;
use std::env;

pub struct Environment;

impl Environment {
    pub fn string(
        env_name: &str,
        default: &str,
    ) -> String {
        env::var(env_name).ok().unwrap_or(default.to_string())
    }

    pub fn optional_string(env_name: &str) -> Option<String> {
        env::var(env_name).ok().filter(|value| !value.is_empty())
    }

    pub fn required_string(env_name: &str) -> Result<String, LambdaCronError> {
        Self::optional_string(env_name).ok_or_else(|| LambdaCronError::configuration(&format!("{env_name} must be set")))
    }

    pub fn boolean(
        env_name: &str,
        default: bool,
    ) -> Result<bool, LambdaCronError> {
        match env::var(env_name).ok().filter(|value| !value.is_empty()) {
            None => Ok(default),
            Some(value) => value
                .to_lowercase()
                .parse::<bool>()
                .map_err(|_| LambdaCronError::configuration(&format!("{env_name} must be true or false, got {value}"))),
        }
    }

    /// Reads a JSON list of strings. Unset or empty yields an empty list unless `required`.
    pub fn json_string_list(
        env_name: &str,
        required: bool,
    ) -> Result<Vec<String>, LambdaCronError> {
        let raw = match Self::optional_string(env_name) {
            Some(raw) => raw,
            None if required => return Err(LambdaCronError::configuration(&format!("{env_name} must be set to a JSON list"))),
            None => return Ok(vec![]),
        };

        let invalid = || LambdaCronError::configuration(&format!("{env_name} must be a JSON list of strings"));

        match serde_json::from_str::<Value>(&raw).map_err(|_| invalid())? {
            Value::Array(values) => values
                .into_iter()
                .map(|value| match value {
                    Value::String(value) => Ok(value),
                    _ => Err(invalid()),
                })
                .collect(),
            _ => Err(invalid()),
        }
    }

    /// Reads a JSON object of string keys to string values, defaulting to `{}` when unset.
    pub fn json_string_map(env_name: &str) -> Result<BTreeMap<String, String>, LambdaCronError> {
        let raw = Self::string(env_name, "{}");

        let value = serde_json::from_str::<Value>(&raw).map_err(|_| LambdaCronError::configuration(&format!("{env_name} must be valid JSON")))?;

        let invalid = || LambdaCronError::configuration(&format!("{env_name} must be a JSON object of string keys to string values"));

        match value {
            Value::Object(entries) => entries
                .into_iter()
                .map(|(key, value)| match value {
                    Value::String(value) => Ok((key, value)),
                    _ => Err(invalid()),
                })
                .collect(),
            _ => Err(invalid()),
        }
    }
}
