//! JSON output formatting

use chrono::Utc;
use serde::{Deserialize, Serialize};

use pulumi_cloud_client::{Error, Result};

/// Wrapper for JSON output with metadata
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T> {
    pub data: T,
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct Metadata {
    /// When the output was produced (RFC 3339)
    pub timestamp: String,

    /// CLI version
    pub version: String,
}

impl<T> JsonOutput<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

/// Format data as pretty-printed JSON inside a `data`/`meta` envelope
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    serde_json::to_string_pretty(&JsonOutput::new(data)).map_err(Error::Output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulumi_cloud_client::client::Stack;

    fn stack(name: &str) -> Stack {
        Stack {
            name: name.to_string(),
            organization: "acme".to_string(),
            project: "web".to_string(),
            last_update: None,
            resource_count: 2,
            resources: None,
            description: None,
            tags: None,
        }
    }

    #[test]
    fn test_json_output_meta() {
        let output = JsonOutput::new(vec!["dev"]);
        assert_eq!(output.meta.version, env!("CARGO_PKG_VERSION"));
        assert!(!output.meta.timestamp.is_empty());
    }

    #[test]
    fn test_format_json_uses_api_field_names() {
        let result = format_json(&[stack("dev")]).unwrap();

        assert!(result.contains("\"data\""));
        assert!(result.contains("\"orgName\": \"acme\""));
        assert!(result.contains("\"resourceCount\": 2"));
        assert!(!result.contains("lastUpdate"));
    }

    #[test]
    fn test_format_json_reports_encoding_failure_as_output_error() {
        use std::collections::BTreeMap;

        // Object keys must be strings
        let data: BTreeMap<Vec<u8>, u8> = BTreeMap::from([(vec![1], 1)]);
        let err = format_json(&data).unwrap_err();

        assert!(matches!(err, Error::Output(_)));
        assert!(err.to_string().starts_with("Failed to encode output"));
    }

    #[test]
    fn test_format_json_empty_list() {
        let stacks: Vec<Stack> = vec![];
        let result = format_json(&stacks).unwrap();
        assert!(result.contains("\"data\": []"));
    }
}
