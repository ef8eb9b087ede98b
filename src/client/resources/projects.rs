//! Project operations

use std::sync::Arc;

use reqwest::Method;

use super::{decode_list, require_body};
use crate::client::api::PulumiApi;
use crate::client::models::Project;
use crate::error::Result;

/// Project endpoints
#[derive(Clone)]
pub struct Projects {
    api: Arc<dyn PulumiApi>,
}

impl Projects {
    pub fn new(api: Arc<dyn PulumiApi>) -> Self {
        Self { api }
    }

    pub async fn list(&self, org_name: &str) -> Result<Vec<Project>> {
        let path = format!("/api/organizations/{}/projects", org_name);
        let response = self.api.request(Method::GET, &path, None, None).await?;
        decode_list(response, "projects", |item| {
            Project::from_api_response(item, org_name)
        })
    }

    pub async fn get(&self, org_name: &str, project_name: &str) -> Result<Project> {
        let path = format!("/api/organizations/{}/projects/{}", org_name, project_name);
        let response = self.api.request(Method::GET, &path, None, None).await?;
        Project::from_api_response(&require_body(response, "project")?, org_name)
    }
}
