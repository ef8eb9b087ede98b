//! Resource façades
//!
//! Each façade translates domain operations into a single request against
//! the shared [`PulumiApi`](super::PulumiApi) handle and maps the result into
//! models.

mod organizations;
mod policies;
mod projects;
mod stacks;

pub use organizations::Organizations;
pub use policies::Policies;
pub use projects::Projects;
pub use stacks::Stacks;

use serde_json::Value;

use crate::error::{Error, Result};

/// The body of a response that must not be empty
fn require_body(value: Option<Value>, what: &str) -> Result<Value> {
    value.ok_or_else(|| Error::InvalidResponse(format!("empty response for {}", what)))
}

/// Map every element of a top-level JSON array, preserving order
fn decode_list<T>(
    value: Option<Value>,
    what: &str,
    decode: impl Fn(&Value) -> Result<T>,
) -> Result<Vec<T>> {
    match require_body(value, what)? {
        Value::Array(items) => items.iter().map(decode).collect(),
        other => Err(Error::InvalidResponse(format!(
            "expected a list of {}, got {}",
            what,
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
