//! Organization models

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{decode, timestamp};
use crate::error::Result;

/// Pulumi Cloud organization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Organization name (unique identifier)
    pub name: String,

    /// Human-readable display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Linked GitHub login, if the org is backed by one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_login: Option<String>,

    #[serde(
        default,
        deserialize_with = "timestamp::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_on: Option<DateTime<Utc>>,
}

impl Organization {
    pub fn from_api_response(item: &Value) -> Result<Self> {
        decode(item)
    }

    /// The organization name; orgs have no parent scope
    pub fn full_name(&self) -> String {
        self.name.clone()
    }
}

/// Role granted to an invited member
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Admin,
    #[default]
    Member,
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberRole::Admin => write!(f, "admin"),
            MemberRole::Member => write!(f, "member"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    #[test]
    fn test_organization_full_response() {
        let org = Organization::from_api_response(&json!({
            "name": "acme",
            "displayName": "Acme Corp",
            "githubLogin": "acme-gh",
            "createdOn": "2022-06-01T09:00:00Z"
        }))
        .unwrap();

        assert_eq!(org.name, "acme");
        assert_eq!(org.display_name.as_deref(), Some("Acme Corp"));
        assert_eq!(org.github_login.as_deref(), Some("acme-gh"));
        assert_eq!(org.created_on.unwrap().to_rfc3339(), "2022-06-01T09:00:00+00:00");
        assert_eq!(org.full_name(), "acme");
    }

    #[test]
    fn test_organization_optional_fields_absent() {
        let org = Organization::from_api_response(&json!({"name": "solo"})).unwrap();
        assert!(org.display_name.is_none());
        assert!(org.github_login.is_none());
        assert!(org.created_on.is_none());
    }

    #[test]
    fn test_organization_missing_name_fails() {
        let err = Organization::from_api_response(&json!({"displayName": "No Name"})).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_member_role_serializes_lowercase() {
        assert_eq!(serde_json::to_value(MemberRole::Admin).unwrap(), json!("admin"));
        assert_eq!(MemberRole::default().to_string(), "member");
    }
}
