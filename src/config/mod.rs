//! Client configuration
//!
//! A [`ClientConfig`] is built in code, from the environment, or from an
//! optional YAML file at `~/.pulumi-cloud/config.yaml`. Environment values
//! win over the file.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default Pulumi Cloud API host
pub const DEFAULT_BASE_URL: &str = "https://api.pulumi.com";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default number of retries after the first failed attempt
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default delay before the first retry
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Environment variable holding the access token
pub const ACCESS_TOKEN_ENV: &str = "PULUMI_ACCESS_TOKEN";

/// Environment variable overriding the base URL
pub const BACKEND_URL_ENV: &str = "PULUMI_BACKEND_URL";

/// Settings for a [`PulumiClient`](crate::client::PulumiClient).
///
/// Immutable once handed to the client.
#[derive(Clone, PartialEq)]
pub struct ClientConfig {
    access_token: String,
    base_url: String,
    timeout: Duration,
    max_retries: u32,
    retry_delay: Duration,
}

impl ClientConfig {
    /// Create a configuration with default settings for the given token
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }

    /// Override the API base URL. Trailing slashes are stripped.
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = base_url.as_ref().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Delay before the first retry; doubled after every retry
    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn retry_delay(&self) -> Duration {
        self.retry_delay
    }

    /// Check the token is present and the base URL parses
    pub fn validate(&self) -> Result<()> {
        if self.access_token.trim().is_empty() {
            return Err(ConfigError::MissingAccessToken.into());
        }

        reqwest::Url::parse(&self.base_url).map_err(|e| {
            ConfigError::Invalid(format!("base URL '{}': {}", self.base_url, e))
        })?;

        Ok(())
    }

    /// Build a configuration from `PULUMI_ACCESS_TOKEN` and `PULUMI_BACKEND_URL`
    pub fn from_env() -> Result<Self> {
        Self::resolve(
            FileConfig::default(),
            std::env::var(ACCESS_TOKEN_ENV).ok(),
            std::env::var(BACKEND_URL_ENV).ok(),
        )
    }

    /// Load the config file (if present) and apply environment overrides.
    ///
    /// With no explicit path the default location is used; a missing default
    /// file is not an error, a missing explicit one is.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => FileConfig::load_from(path)?,
            None => {
                let default = FileConfig::default_path()?;
                if default.exists() {
                    FileConfig::load_from(&default)?
                } else {
                    FileConfig::default()
                }
            }
        };

        Self::resolve(
            file,
            std::env::var(ACCESS_TOKEN_ENV).ok(),
            std::env::var(BACKEND_URL_ENV).ok(),
        )
    }

    /// Merge file settings with environment values (environment wins)
    pub fn resolve(
        file: FileConfig,
        env_token: Option<String>,
        env_base_url: Option<String>,
    ) -> Result<Self> {
        let access_token = env_token
            .filter(|t| !t.trim().is_empty())
            .or(file.access_token)
            .ok_or(ConfigError::MissingAccessToken)?;

        let mut config = Self::new(access_token);

        if let Some(base_url) = env_base_url
            .filter(|u| !u.trim().is_empty())
            .or(file.base_url)
        {
            config = config.with_base_url(base_url);
        }
        if let Some(secs) = file.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if let Some(retries) = file.max_retries {
            config = config.with_max_retries(retries);
        }
        if let Some(secs) = file.retry_delay_secs {
            let delay = Duration::try_from_secs_f64(secs).map_err(|e| {
                ConfigError::Invalid(format!("retry_delay_secs {}: {}", secs, e))
            })?;
            config = config.with_retry_delay(delay);
        }

        config.validate()?;
        Ok(config)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("access_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .field("retry_delay", &self.retry_delay)
            .finish()
    }
}

/// On-disk configuration, every field optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_delay_secs: Option<f64>,
}

impl FileConfig {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".pulumi-cloud").join("config.yaml"))
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: FileConfig = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("tok");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.max_retries(), 3);
        assert_eq!(config.retry_delay(), Duration::from_secs(1));
    }

    #[test]
    fn test_base_url_trailing_slashes_stripped() {
        let config = ClientConfig::new("tok").with_base_url("https://pulumi.example.com//");
        assert_eq!(config.base_url(), "https://pulumi.example.com");
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ClientConfig::new("pul-secret-value");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("pul-secret-value"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_validate_rejects_empty_token() {
        let err = ClientConfig::new("  ").validate().unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::MissingAccessToken)
        ));
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let err = ClientConfig::new("tok")
            .with_base_url("not a url")
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_resolve_env_overrides_file() {
        let file = FileConfig {
            access_token: Some("file-token".to_string()),
            base_url: Some("https://file.example.com".to_string()),
            timeout_secs: Some(5),
            max_retries: Some(1),
            retry_delay_secs: Some(0.5),
        };

        let config = ClientConfig::resolve(
            file,
            Some("env-token".to_string()),
            Some("https://env.example.com/".to_string()),
        )
        .unwrap();

        assert_eq!(config.access_token(), "env-token");
        assert_eq!(config.base_url(), "https://env.example.com");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.max_retries(), 1);
        assert_eq!(config.retry_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_resolve_without_token_fails() {
        let err = ClientConfig::resolve(FileConfig::default(), None, None).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::MissingAccessToken)
        ));
    }

    #[test]
    fn test_resolve_rejects_negative_delay() {
        let file = FileConfig {
            retry_delay_secs: Some(-1.0),
            ..Default::default()
        };
        let err = ClientConfig::resolve(file, Some("tok".to_string()), None).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_resolve_rejects_unrepresentable_delay() {
        for secs in [1e30, f64::INFINITY, f64::NAN] {
            let file = FileConfig {
                retry_delay_secs: Some(secs),
                ..Default::default()
            };
            let err = ClientConfig::resolve(file, Some("tok".to_string()), None).unwrap_err();
            assert!(matches!(err, Error::Config(ConfigError::Invalid(_))), "{secs}");
        }
    }

    #[test]
    fn test_load_from_yaml_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "access_token: from-file\nbase_url: https://self-hosted.example.com/\nmax_retries: 5"
        )
        .unwrap();

        let loaded = FileConfig::load_from(file.path()).unwrap();
        assert_eq!(loaded.access_token.as_deref(), Some("from-file"));
        assert_eq!(loaded.max_retries, Some(5));

        let config = ClientConfig::resolve(loaded, None, None).unwrap();
        assert_eq!(config.base_url(), "https://self-hosted.example.com");
        assert_eq!(config.max_retries(), 5);
    }

    #[test]
    fn test_load_from_invalid_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "max_retries: [not, a, number").unwrap();

        let err = FileConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ParseError(_))));
    }
}
