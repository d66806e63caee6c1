//! Handler and constructor return values.

use axum::response::{IntoResponse, Redirect, Response};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// What a wrapped handler or context constructor produces.
///
/// Either a key-value template context, or a raw response that bypasses
/// templating entirely and is returned to the client unchanged (redirects,
/// pre-built error responses, and the like).
#[derive(Debug)]
pub enum RenderPayload {
    /// Template context variables.
    Vars(Map<String, Value>),
    /// A finished response; templating is skipped.
    Raw(Response),
}

impl Default for RenderPayload {
    fn default() -> Self {
        RenderPayload::Vars(Map::new())
    }
}

impl RenderPayload {
    /// An empty template context, for templates that need no variables.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a context from a JSON value, which must be an object.
    ///
    /// Pairs with `serde_json::json!`:
    ///
    /// ```rust
    /// use htmx_jinja::htmx::RenderPayload;
    /// use serde_json::json;
    ///
    /// let payload = RenderPayload::vars(json!({ "customers": ["John Doe"] }));
    /// assert!(payload.is_ok());
    /// ```
    pub fn vars(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(RenderPayload::Vars(map)),
            other => Err(Error::InvalidContext(format!(
                "template context must be a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Build a context by serializing any `Serialize` type to a JSON object.
    pub fn from_serialize<T: Serialize>(data: &T) -> Result<Self> {
        let value = serde_json::to_value(data).map_err(|e| Error::InvalidContext(e.to_string()))?;
        Self::vars(value)
    }

    /// Wrap a finished response; the dispatcher returns it unchanged.
    pub fn raw(response: impl IntoResponse) -> Self {
        RenderPayload::Raw(response.into_response())
    }
}

impl From<Map<String, Value>> for RenderPayload {
    fn from(vars: Map<String, Value>) -> Self {
        RenderPayload::Vars(vars)
    }
}

impl From<Response> for RenderPayload {
    fn from(response: Response) -> Self {
        RenderPayload::Raw(response)
    }
}

impl From<Redirect> for RenderPayload {
    fn from(redirect: Redirect) -> Self {
        RenderPayload::raw(redirect)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
