use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Parsed message payload. Always a JSON object.
pub type ResultPayload = Map<String, Value>;

/// Template name to template source, loaded once per batch.
pub type TemplateSet = BTreeMap<String, String>;

/// Template name to rendered output for one payload.
pub type RenderedSet = BTreeMap<String, String>;
