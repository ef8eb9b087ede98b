//! Raw API request command

use colored::Colorize;
use serde_json::Value;

use pulumi_cloud_client::{Error, Result};

use crate::cli::{ApiArgs, CommandContext};

/// Parse a `key=value` query argument
pub fn parse_key_val(s: &str) -> std::result::Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("invalid key=value pair: no '=' in '{s}'"))
}

/// Run the api command
pub async fn run(ctx: &CommandContext, args: &ApiArgs) -> Result<()> {
    let body: Option<Value> = args
        .body
        .as_deref()
        .map(serde_json::from_str)
        .transpose()
        .map_err(|e| Error::InvalidArgument(format!("--body is not valid JSON: {}", e)))?;

    let query: Vec<(&str, &str)> = args
        .query
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    let query = (!query.is_empty()).then_some(query.as_slice());

    let response = ctx
        .client
        .request(&args.method, &args.path, query, body.as_ref())
        .await?;

    match response {
        Some(value) => println!(
            "{}",
            serde_json::to_string_pretty(&value).map_err(Error::Output)?
        ),
        None => eprintln!("{} No content", "✓".green()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_val() {
        assert_eq!(
            parse_key_val("page=2").unwrap(),
            ("page".to_string(), "2".to_string())
        );
        assert_eq!(
            parse_key_val("q=a=b").unwrap(),
            ("q".to_string(), "a=b".to_string())
        );
        assert_eq!(parse_key_val("empty=").unwrap().1, "");
    }

    #[test]
    fn test_parse_key_val_requires_equals() {
        assert!(parse_key_val("page").is_err());
    }
}
