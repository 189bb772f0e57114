/*
[INPUT]:  YAML configuration file
[OUTPUT]: Client configuration and optional API credentials
[POS]:    Configuration layer - CLI startup
[UPDATE]: When adding new configuration options
*/

use std::time::Duration;

use okex_v5_adapter::{ClientConfig, Credentials};
use serde::{Deserialize, Serialize};

/// Top-level CLI configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CliConfig {
    /// Overrides applied on top of the library defaults
    #[serde(default)]
    pub client: ClientOverrides,
    /// API credentials; omitted for public-only use
    #[serde(default)]
    pub credentials: Option<Credentials>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClientOverrides {
    pub base_url: Option<String>,
    pub api_version: Option<String>,
    pub timeout_secs: Option<u64>,
    pub connect_timeout_secs: Option<u64>,
    pub request_window_secs: Option<u64>,
}

impl ClientOverrides {
    pub fn apply(&self, mut config: ClientConfig) -> ClientConfig {
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(api_version) = &self.api_version {
            config.api_version = api_version.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = self.connect_timeout_secs {
            config.connect_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = self.request_window_secs {
            config.request_window = Duration::from_secs(secs);
        }
        config
    }
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        Ok(config)
    }

    pub fn client_config(&self) -> ClientConfig {
        self.client.apply(ClientConfig::default())
    }
}
