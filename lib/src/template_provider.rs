use crate::environment::Environment;
use crate::error::LambdaCronError;
use std::collections::BTreeMap;

/// Resolves template sources by template name.
pub trait TemplateProvider: Send + Sync {
    fn resolve(
        &self,
        name: &str,
    ) -> Result<String, LambdaCronError>;
}

/// Reads each template from its own environment variable.
#[derive(Debug, Clone, Default)]
pub struct EnvVarTemplateProvider {
    variables: BTreeMap<String, String>,
}

impl EnvVarTemplateProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variable(
        mut self,
        name: &str,
        env_name: &str,
    ) -> Self {
        self.variables.insert(name.to_string(), env_name.to_string());
        self
    }

    /// `body` read from `TEMPLATE`.
    pub fn body() -> Self {
        Self::new().with_variable("body", "TEMPLATE")
    }

    pub fn email() -> Self {
        Self::new()
            .with_variable("subject", "EMAIL_SUBJECT_TEMPLATE")
            .with_variable("text", "EMAIL_TEXT_TEMPLATE")
            .with_variable("html", "EMAIL_HTML_TEMPLATE")
    }
}

impl TemplateProvider for EnvVarTemplateProvider {
    fn resolve(
        &self,
        name: &str,
    ) -> Result<String, LambdaCronError> {
        let env_name = self
            .variables
            .get(name)
            .ok_or_else(|| LambdaCronError::configuration(&format!("No environment variable configured for template {name}")))?;

        Environment::optional_string(env_name).ok_or_else(|| LambdaCronError::configuration(&format!("{env_name} must be set to a non-empty template")))
    }
}

/// Fixed in-memory templates.
#[derive(Debug, Clone, Default)]
pub struct StaticTemplateProvider {
    templates: BTreeMap<String, String>,
}

impl StaticTemplateProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(
        mut self,
        name: &str,
        source: &str,
    ) -> Self {
        self.templates.insert(name.to_string(), source.to_string());
        self
    }
}

impl TemplateProvider for StaticTemplateProvider {
    fn resolve(
        &self,
        name: &str,
    ) -> Result<String, LambdaCronError> {
        self.templates
            .get(name)
            .filter(|source| !source.is_empty())
            .cloned()
            .ok_or_else(|| LambdaCronError::configuration(&format!("Template {name} must be set to a non-empty template")))
    }
}
