//! Recording mock of the request core for façade tests
//!
//! Queue responses with the builder methods; every call is captured so tests
//! can assert on method, path, query and body.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use super::api::PulumiApi;
use crate::error::{ApiError, Result};

/// A request seen by the mock
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<Vec<(String, String)>>,
    pub body: Option<Value>,
}

/// Mock API returning queued responses in order.
///
/// Once the queue is empty every call answers with an empty body.
#[derive(Default)]
pub struct MockPulumiApi {
    responses: Mutex<VecDeque<Result<Option<Value>>>>,
    captured: Mutex<Vec<CapturedRequest>>,
}

impl MockPulumiApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON body
    pub fn with_response(self, value: Value) -> Self {
        self.push(Ok(Some(value)));
        self
    }

    /// Queue an empty 2xx response
    pub fn with_empty_response(self) -> Self {
        self.push(Ok(None));
        self
    }

    /// Queue an API error
    pub fn with_error(self, error: ApiError) -> Self {
        self.push(Err(error.into()));
        self
    }

    fn push(&self, response: Result<Option<Value>>) {
        self.responses
            .lock()
            .expect("mock responses poisoned")
            .push_back(response);
    }

    /// All captured requests, oldest first
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().expect("mock requests poisoned").clone()
    }

    /// The only captured request; panics if there was not exactly one
    pub fn single_request(&self) -> CapturedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request: {requests:?}");
        requests.into_iter().next().expect("one request")
    }
}

#[async_trait]
impl PulumiApi for MockPulumiApi {
    async fn request(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, &str)]>,
        body: Option<&Value>,
    ) -> Result<Option<Value>> {
        self.captured
            .lock()
            .expect("mock requests poisoned")
            .push(CapturedRequest {
                method,
                path: path.to_string(),
                query: query.map(|pairs| {
                    pairs
                        .iter()
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .collect()
                }),
                body: body.cloned(),
            });

        self.responses
            .lock()
            .expect("mock responses poisoned")
            .pop_front()
            .unwrap_or(Ok(None))
    }
}
