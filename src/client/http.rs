//! HTTP request core
//!
//! Every API call goes through [`HttpApi::request`]: it builds the URL,
//! attaches the token, sends JSON, classifies the outcome and retries
//! transient failures according to the configured [`RetryPolicy`].

use async_trait::async_trait;
use log::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderValue};
use reqwest::{Client as HttpClient, Method};
use serde_json::Value;

use super::api::PulumiApi;
use super::retry::RetryPolicy;
use crate::config::ClientConfig;
use crate::error::{ApiError, ConfigError, Error, Result};

const USER_AGENT: &str = concat!("pulumi-cloud-client/", env!("CARGO_PKG_VERSION"));

/// Join `path` onto `base_url` with exactly one `/` between them
pub fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Parse a method name case-insensitively.
///
/// Only the verbs the API uses are accepted.
pub fn parse_method(method: &str) -> Result<Method> {
    match method.to_ascii_uppercase().as_str() {
        "GET" => Ok(Method::GET),
        "POST" => Ok(Method::POST),
        "PUT" => Ok(Method::PUT),
        "PATCH" => Ok(Method::PATCH),
        "DELETE" => Ok(Method::DELETE),
        _ => Err(Error::UnsupportedMethod(method.to_string())),
    }
}

/// Request core backed by a pooled `reqwest` client
pub struct HttpApi {
    http: HttpClient,
    base_url: String,
    authorization: HeaderValue,
    retry: RetryPolicy,
}

impl HttpApi {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let http = HttpClient::builder()
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .build()?;

        let mut authorization = HeaderValue::from_str(&format!("token {}", config.access_token()))
            .map_err(|_| ConfigError::Invalid("access token contains invalid characters".to_string()))?;
        authorization.set_sensitive(true);

        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            authorization,
            retry: RetryPolicy::new(config.max_retries(), config.retry_delay()),
        })
    }

    /// One attempt, no retry
    async fn send_once(
        &self,
        method: &Method,
        url: &str,
        query: Option<&[(&str, &str)]>,
        body: Option<&Value>,
    ) -> Result<Option<Value>> {
        debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method.clone(), url)
            .header(AUTHORIZATION, self.authorization.clone())
            .header(ACCEPT, "application/json");
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("Unknown Status");
            return Err(ApiError::from_body(status.as_u16(), reason, &bytes).into());
        }

        if bytes.is_empty() {
            return Ok(None);
        }

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| Error::InvalidResponse(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl PulumiApi for HttpApi {
    async fn request(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, &str)]>,
        body: Option<&Value>,
    ) -> Result<Option<Value>> {
        let url = join_url(&self.base_url, path);
        self.retry
            .run(
                || self.send_once(&method, &url, query, body),
                Error::is_retryable,
            )
            .await
    }
}
