//! Organization operations

use std::sync::Arc;

use reqwest::Method;
use serde_json::{Value, json};

use super::{decode_list, require_body};
use crate::client::api::PulumiApi;
use crate::client::models::{MemberRole, Organization};
use crate::error::Result;

/// Organization and membership endpoints
#[derive(Clone)]
pub struct Organizations {
    api: Arc<dyn PulumiApi>,
}

impl Organizations {
    pub fn new(api: Arc<dyn PulumiApi>) -> Self {
        Self { api }
    }

    /// Organizations the caller belongs to
    pub async fn list(&self) -> Result<Vec<Organization>> {
        let response = self
            .api
            .request(Method::GET, "/api/user/organizations", None, None)
            .await?;
        decode_list(response, "organizations", Organization::from_api_response)
    }

    pub async fn get(&self, org_name: &str) -> Result<Organization> {
        let path = format!("/api/organizations/{}", org_name);
        let response = self.api.request(Method::GET, &path, None, None).await?;
        Organization::from_api_response(&require_body(response, "organization")?)
    }

    /// Raw member listing; the API shape varies between plans
    pub async fn list_team_members(&self, org_name: &str) -> Result<Value> {
        let path = format!("/api/organizations/{}/members", org_name);
        let response = self.api.request(Method::GET, &path, None, None).await?;
        Ok(response.unwrap_or(Value::Null))
    }

    /// Invite a user by email, returning the invitation as sent back by the API
    pub async fn invite_user(&self, org_name: &str, email: &str, role: MemberRole) -> Result<Value> {
        let path = format!("/api/organizations/{}/members", org_name);
        let body = json!({ "email": email, "role": role });
        let response = self
            .api
            .request(Method::POST, &path, None, Some(&body))
            .await?;
        Ok(response.unwrap_or(Value::Null))
    }
}
