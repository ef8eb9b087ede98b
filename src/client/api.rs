//! The request seam between façades and transport

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use crate::error::Result;

/// Issue one logical API call.
///
/// Implementations join `path` onto their base URL, attach credentials,
/// send `body` as JSON and return the parsed JSON body, or `None` for an
/// empty 2xx response.
#[async_trait]
pub trait PulumiApi: Send + Sync {
    async fn request(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, &str)]>,
        body: Option<&Value>,
    ) -> Result<Option<Value>>;
}
