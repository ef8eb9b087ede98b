//! Policy pack models

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{decode, string_or_number};
use crate::error::Result;

/// Versioned bundle of policies published to an organization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyPack {
    /// Policy pack name (unique within the organization)
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Version, as a tag such as `1.2.0` or a bare revision number
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_organizational: Option<bool>,

    /// Creation time as reported by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl PolicyPack {
    pub fn from_api_response(item: &Value) -> Result<Self> {
        decode(item)
    }

    /// `org/name` when the owning organization is known, else just `name`
    pub fn full_name(&self) -> String {
        match self.organization.as_deref() {
            Some(org) if !org.is_empty() => format!("{}/{}", org, self.name),
            _ => self.name.clone(),
        }
    }
}
