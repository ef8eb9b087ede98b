//! Project models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{decode, timestamp};
use crate::error::Result;

/// Pulumi project within an organization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project name
    pub name: String,

    /// Owning organization; project responses do not carry it
    #[serde(skip_deserializing, default)]
    pub organization: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(
        default,
        rename = "createdOn",
        deserialize_with = "timestamp::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_on: Option<DateTime<Utc>>,

    #[serde(
        default,
        rename = "lastUpdated",
        deserialize_with = "timestamp::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_on: Option<DateTime<Utc>>,

    /// Language runtime (nodejs, python, go, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
}

impl Project {
    /// Decode a project, attaching the organization it was requested from
    pub fn from_api_response(item: &Value, org_name: &str) -> Result<Self> {
        let mut project: Project = decode(item)?;
        project.organization = org_name.to_string();
        Ok(project)
    }

    pub fn full_name(&self) -> String {
        format!("{}/{}", self.organization, self.name)
    }
}
