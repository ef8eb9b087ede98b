//! Stack models

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{decode, null_as_default, timestamp};
use crate::error::Result;

/// Deployed environment instance of a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stack {
    /// Stack name
    pub name: String,

    /// Owning organization
    #[serde(rename = "orgName")]
    pub organization: String,

    /// Owning project
    #[serde(rename = "projectName")]
    pub project: String,

    /// Time of the most recent update
    #[serde(
        default,
        rename = "lastUpdate",
        deserialize_with = "timestamp::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_update: Option<DateTime<Utc>>,

    /// Number of resources managed by the stack
    #[serde(default, rename = "resourceCount", deserialize_with = "null_as_default")]
    pub resource_count: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<StackResource>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Tag map. `None` when the response carries no `tags` field, which is
    /// distinct from an empty map; JSON output omits the field in that case.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,
}

impl Stack {
    pub fn from_api_response(item: &Value) -> Result<Self> {
        decode(item)
    }

    /// `org/project/stack`
    pub fn full_name(&self) -> String {
        format!("{}/{}/{}", self.organization, self.project, self.name)
    }
}

/// Single resource managed by a stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackResource {
    #[serde(alias = "id")]
    pub resource_id: String,

    /// Type token, e.g. `aws:s3/bucket:Bucket`
    #[serde(rename = "type")]
    pub resource_type: String,

    pub name: String,

    pub provider: String,

    /// Id of the parent resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: Map<String, Value>,
}
