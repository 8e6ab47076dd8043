// wallet-core/src/config.rs
//
// Generator configuration, optionally loaded from a TOML file.
//
//   network = "ethereum"   # solana | ethereum
//   output = "json"        # text | json
//   log_level = "debug"

use crate::chains::Network;
use crate::error::{WalletError, WalletResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub network: Network,
    pub output: OutputFormat,
    pub log_level: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            network: Network::default(),
            output: OutputFormat::default(),
            log_level: "info".to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn load(path: &Path) -> WalletResult<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| WalletError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> WalletResult<Self> {
        toml::from_str(raw).map_err(|e| WalletError::Validation(format!("Invalid config: {}", e)))
    }

    /// Command-line values win over file values.
    pub fn with_overrides(mut self, network: Option<Network>, json: bool) -> Self {
        if let Some(network) = network {
            self.network = network;
        }
        if json {
            self.output = OutputFormat::Json;
        }
        self
    }
}
