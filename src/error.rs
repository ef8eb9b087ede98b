//! Error types for the Pulumi Cloud client

use serde_json::Value;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    /// The API answered with a non-2xx status
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The request never produced a response (connect, DNS, timeout, body read)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A 2xx response whose body could not be used
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    /// A response value could not be mapped onto a model
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// A result could not be rendered for output
    #[error("Failed to encode output: {0}")]
    Output(#[source] serde_json::Error),

    /// Bad user-supplied argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

impl Error {
    /// Whether the request core should try this call again.
    ///
    /// Transport failures always qualify; API errors only for rate limiting
    /// and gateway/server statuses.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Network(_) => true,
            Error::Api(err) => err.is_retryable(),
            _ => false,
        }
    }

    /// The API error carried by this error, if any
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// Statuses that are retried with backoff
pub const RETRYABLE_STATUS_CODES: [u16; 5] = [429, 500, 502, 503, 504];

/// A non-2xx outcome from the Pulumi Cloud API
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Pulumi API Error ({status_code}): {message}")]
pub struct ApiError {
    /// HTTP status code
    pub status_code: u16,

    /// Message from the body's `message` field, or the HTTP reason phrase
    pub message: String,

    /// Parsed response body, when it was valid JSON
    pub response_data: Option<Value>,
}

impl ApiError {
    /// Create an error from a status and message with no body
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
            response_data: None,
        }
    }

    /// Build an error from a raw response body.
    ///
    /// `reason` is used as the message unless the body is a JSON object
    /// carrying a string `message`.
    pub fn from_body(status_code: u16, reason: &str, body: &[u8]) -> Self {
        let response_data = serde_json::from_slice::<Value>(body).ok();
        let message = response_data
            .as_ref()
            .and_then(|data| data.get("message"))
            .and_then(Value::as_str)
            .unwrap_or(reason)
            .to_string();

        Self {
            status_code,
            message,
            response_data,
        }
    }

    /// Rate limiting and server-side failures are worth retrying
    pub fn is_retryable(&self) -> bool {
        RETRYABLE_STATUS_CODES.contains(&self.status_code)
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Access token not configured. Set PULUMI_ACCESS_TOKEN or add access_token to the config file.")]
    MissingAccessToken,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
