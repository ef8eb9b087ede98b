//! Policy pack operations

use std::sync::Arc;

use reqwest::Method;

use super::{decode_list, require_body};
use crate::client::api::PulumiApi;
use crate::client::models::PolicyPack;
use crate::error::Result;

/// Policy pack endpoints
#[derive(Clone)]
pub struct Policies {
    api: Arc<dyn PulumiApi>,
}

impl Policies {
    pub fn new(api: Arc<dyn PulumiApi>) -> Self {
        Self { api }
    }

    pub async fn list(&self, org_name: &str) -> Result<Vec<PolicyPack>> {
        let path = format!("/api/organizations/{}/policy-packs", org_name);
        let response = self.api.request(Method::GET, &path, None, None).await?;
        decode_list(response, "policy packs", PolicyPack::from_api_response)
    }

    /// A specific version of a policy pack
    pub async fn get(
        &self,
        org_name: &str,
        policy_pack_name: &str,
        version: &str,
    ) -> Result<PolicyPack> {
        let path = format!(
            "/api/organizations/{}/policy-packs/{}/versions/{}",
            org_name, policy_pack_name, version
        );
        let response = self.api.request(Method::GET, &path, None, None).await?;
        PolicyPack::from_api_response(&require_body(response, "policy pack")?)
    }
}
