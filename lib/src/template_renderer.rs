use crate::error::LambdaCronError;
use crate::notification::{RenderedSet, ResultPayload, TemplateSet};
use handlebars::{Context, Handlebars, Helper, HelperResult, Output, RenderContext};
use serde_json::Value;

/// Renders template sets in strict mode: any reference to a variable absent from the payload fails.
///
/// Strict mode does not cover the condition of `{{#if}}` and `{{#unless}}` blocks. A missing
/// condition reads as false, so `{{#if flag}}` against a payload without `flag` takes the `else` branch.
pub struct TemplateRenderer {
    registry: Handlebars<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);
        registry.register_helper("default", Box::new(default_helper));

        Self { registry }
    }

    pub fn render(
        &self,
        templates: &TemplateSet,
        payload: &ResultPayload,
    ) -> Result<RenderedSet, LambdaCronError> {
        templates
            .iter()
            .map(|(name, source)| {
                self.registry
                    .render_template(source, payload)
                    .map(|rendered| (name.clone(), rendered))
                    .map_err(|error| LambdaCronError::render(&error.to_string(), &format!("Failed to render template {name}")))
            })
            .collect()
    }
}

/// `{{default value "fallback"}}` writes the fallback when the value is null or missing.
fn default_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let value = h.param(0).map(|param| param.value()).filter(|value| !value.is_null());
    let fallback = h.param(1).map(|param| param.value());

    match value.or(fallback) {
        Some(Value::String(text)) => out.write(text)?,
        Some(Value::Null) | None => {},
        Some(other) => out.write(&other.to_string())?,
    }

    Ok(())
}
