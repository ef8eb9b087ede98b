//! Pulumi Cloud data models
//!
//! Each model is decoded from a loosely-typed JSON response with its own
//! `from_api_response` function. Optional fields may be absent; a missing
//! required field is a [`Error::Decode`](crate::error::Error::Decode) naming it.

mod org;
mod policy;
mod project;
mod stack;

pub use org::{MemberRole, Organization};
pub use policy::PolicyPack;
pub use project::Project;
pub use stack::{Stack, StackResource};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::Result;

/// Decode a model straight from a response value
pub(crate) fn decode<T: DeserializeOwned>(item: &Value) -> Result<T> {
    Ok(T::deserialize(item)?)
}

/// Treat an explicit `null` the same as a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept `"1.2.0"` as well as a bare number such as `3`
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a string or number, found {}",
            other
        ))),
    }
}

/// Timestamp decoding shared by all models.
///
/// Accepts RFC 3339, naive ISO date-times (taken as UTC) and Unix epoch
/// seconds. `null`, `""` and `0` decode to `None`.
pub(crate) mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) if s.is_empty() => Ok(None),
            Some(Value::String(s)) => parse(&s)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid timestamp '{}'", s))),
            Some(Value::Number(n)) => match n.as_i64() {
                Some(0) => Ok(None),
                Some(secs) => DateTime::from_timestamp(secs, 0)
                    .map(Some)
                    .ok_or_else(|| D::Error::custom(format!("timestamp {} out of range", secs))),
                None => Err(D::Error::custom(format!("invalid timestamp {}", n))),
            },
            Some(other) => Err(D::Error::custom(format!("invalid timestamp {}", other))),
        }
    }

    pub fn parse(s: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Utc));
        }

        NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(|naive| naive.and_utc())
    }
}
