//! Stack operations

use std::collections::BTreeMap;
use std::sync::Arc;

use reqwest::Method;
use serde_json::{Map, Value, json};

use super::{decode_list, require_body};
use crate::client::api::PulumiApi;
use crate::client::models::Stack;
use crate::error::Result;

/// Stack, update, tag and deployment endpoints
#[derive(Clone)]
pub struct Stacks {
    api: Arc<dyn PulumiApi>,
}

fn stack_path(org_name: &str, project_name: &str, stack_name: &str) -> String {
    format!("/api/stacks/{}/{}/{}", org_name, project_name, stack_name)
}

impl Stacks {
    pub fn new(api: Arc<dyn PulumiApi>) -> Self {
        Self { api }
    }

    async fn get_raw(&self, path: &str) -> Result<Value> {
        let response = self.api.request(Method::GET, path, None, None).await?;
        Ok(response.unwrap_or(Value::Null))
    }

    /// Stacks of an organization, or of one project when `project_name` is given
    pub async fn list(&self, org_name: &str, project_name: Option<&str>) -> Result<Vec<Stack>> {
        let mut path = format!("/api/stacks/{}", org_name);
        if let Some(project) = project_name.filter(|p| !p.is_empty()) {
            path.push('/');
            path.push_str(project);
        }

        let response = self.api.request(Method::GET, &path, None, None).await?;
        decode_list(response, "stacks", Stack::from_api_response)
    }

    pub async fn get(&self, org_name: &str, project_name: &str, stack_name: &str) -> Result<Stack> {
        let path = stack_path(org_name, project_name, stack_name);
        let response = self.api.request(Method::GET, &path, None, None).await?;
        Stack::from_api_response(&require_body(response, "stack")?)
    }

    pub async fn create(
        &self,
        org_name: &str,
        project_name: &str,
        stack_name: &str,
    ) -> Result<Stack> {
        let path = stack_path(org_name, project_name, stack_name);
        let body = json!({
            "orgName": org_name,
            "projectName": project_name,
            "stackName": stack_name,
        });
        let response = self
            .api
            .request(Method::POST, &path, None, Some(&body))
            .await?;
        Stack::from_api_response(&require_body(response, "created stack")?)
    }

    /// Patch stack properties with the given fields
    pub async fn update(
        &self,
        org_name: &str,
        project_name: &str,
        stack_name: &str,
        fields: Map<String, Value>,
    ) -> Result<Stack> {
        let path = stack_path(org_name, project_name, stack_name);
        let body = Value::Object(fields);
        let response = self
            .api
            .request(Method::PATCH, &path, None, Some(&body))
            .await?;
        Stack::from_api_response(&require_body(response, "updated stack")?)
    }

    pub async fn delete(&self, org_name: &str, project_name: &str, stack_name: &str) -> Result<()> {
        let path = stack_path(org_name, project_name, stack_name);
        self.api.request(Method::DELETE, &path, None, None).await?;
        Ok(())
    }

    /// Move a stack to another organization.
    ///
    /// This is a POST and is retried like any other call, so a transient
    /// server error may cause the transfer to be attempted more than once.
    pub async fn transfer(
        &self,
        org_name: &str,
        project_name: &str,
        stack_name: &str,
        new_org_name: &str,
    ) -> Result<Stack> {
        let path = format!("{}/transfer", stack_path(org_name, project_name, stack_name));
        let body = json!({ "toOrg": new_org_name });
        let response = self
            .api
            .request(Method::POST, &path, None, Some(&body))
            .await?;
        Stack::from_api_response(&require_body(response, "transferred stack")?)
    }

    /// Status of the most recent update
    pub async fn latest_update(
        &self,
        org_name: &str,
        project_name: &str,
        stack_name: &str,
    ) -> Result<Value> {
        let path = format!(
            "{}/updates/latest",
            stack_path(org_name, project_name, stack_name)
        );
        self.get_raw(&path).await
    }

    pub async fn update_by_id(
        &self,
        org_name: &str,
        project_name: &str,
        stack_name: &str,
        update_id: &str,
    ) -> Result<Value> {
        let path = format!(
            "{}/updates/{}",
            stack_path(org_name, project_name, stack_name),
            update_id
        );
        self.get_raw(&path).await
    }

    pub async fn list_tags(
        &self,
        org_name: &str,
        project_name: &str,
        stack_name: &str,
    ) -> Result<BTreeMap<String, String>> {
        let path = format!("{}/tags", stack_path(org_name, project_name, stack_name));
        match self.api.request(Method::GET, &path, None, None).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(BTreeMap::new()),
        }
    }

    /// Send `tags` as the PATCH body; the response is ignored
    pub async fn update_tags(
        &self,
        org_name: &str,
        project_name: &str,
        stack_name: &str,
        tags: &BTreeMap<String, String>,
    ) -> Result<()> {
        let path = format!("{}/tags", stack_path(org_name, project_name, stack_name));
        let body = serde_json::to_value(tags)?;
        self.api
            .request(Method::PATCH, &path, None, Some(&body))
            .await?;
        Ok(())
    }

    /// Checkpoint of the latest deployment
    pub async fn export_deployment(
        &self,
        org_name: &str,
        project_name: &str,
        stack_name: &str,
    ) -> Result<Value> {
        let path = format!("{}/export", stack_path(org_name, project_name, stack_name));
        self.get_raw(&path).await
    }
}
