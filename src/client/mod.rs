//! Pulumi Cloud API client

use std::sync::Arc;

use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::Result;

pub mod api;
pub mod http;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod resources;
pub mod retry;

pub use api::PulumiApi;
pub use http::{HttpApi, join_url, parse_method};
pub use models::{MemberRole, Organization, PolicyPack, Project, Stack, StackResource};
pub use resources::{Organizations, Policies, Projects, Stacks};
pub use retry::RetryPolicy;

/// Entry point to the Pulumi Cloud API.
///
/// Owns the configuration and one façade per resource family. All façades
/// share a single request core (and its connection pool). Clones are cheap
/// and share that pool.
///
/// ```no_run
/// # async fn run() -> pulumi_cloud_client::Result<()> {
/// use pulumi_cloud_client::PulumiClient;
///
/// let client = PulumiClient::from_env()?;
/// for org in client.organizations().list().await? {
///     println!("{}", org.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct PulumiClient {
    config: ClientConfig,
    api: Arc<dyn PulumiApi>,
    organizations: Organizations,
    projects: Projects,
    stacks: Stacks,
    policies: Policies,
}

impl PulumiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let api = Arc::new(HttpApi::new(&config)?);
        Ok(Self::with_api(config, api))
    }

    /// Client with default settings for the given token
    pub fn with_token(access_token: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::new(access_token))
    }

    /// Client configured from `PULUMI_ACCESS_TOKEN` / `PULUMI_BACKEND_URL`
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Build a client around an existing request core
    pub fn with_api(config: ClientConfig, api: Arc<dyn PulumiApi>) -> Self {
        Self {
            organizations: Organizations::new(api.clone()),
            projects: Projects::new(api.clone()),
            stacks: Stacks::new(api.clone()),
            policies: Policies::new(api.clone()),
            config,
            api,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn organizations(&self) -> &Organizations {
        &self.organizations
    }

    pub fn projects(&self) -> &Projects {
        &self.projects
    }

    pub fn stacks(&self) -> &Stacks {
        &self.stacks
    }

    pub fn policies(&self) -> &Policies {
        &self.policies
    }

    /// Call an endpoint no façade covers.
    ///
    /// `method` is matched case-insensitively against GET, POST, PUT, PATCH
    /// and DELETE.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        query: Option<&[(&str, &str)]>,
        body: Option<&Value>,
    ) -> Result<Option<Value>> {
        let method = parse_method(method)?;
        self.api.request(method, path, query, body).await
    }
}
