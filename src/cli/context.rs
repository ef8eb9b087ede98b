//! Command execution context

use std::path::Path;

use log::debug;
use pulumi_cloud_client::{ClientConfig, PulumiClient, Result};

use crate::cli::OutputFormat;

/// Loaded configuration, a ready client and the output format
pub struct CommandContext {
    pub client: PulumiClient,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Resolve configuration (file, then environment) and build the client
    pub fn new(format: OutputFormat, config_path: Option<&str>) -> Result<Self> {
        let config = ClientConfig::load(config_path.map(Path::new))?;
        debug!("Using {:?}", config);

        Ok(Self {
            client: PulumiClient::new(config)?,
            format,
        })
    }
}
