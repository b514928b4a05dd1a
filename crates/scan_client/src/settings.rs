//! Client configuration.
//!
//! Settings come from a TOML document, from `BSCSCAN_*` environment variables,
//! or are filled in by hand, and feed [`crate::ScanClientBuilder`].

use crate::error::{ScanError, ScanResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Request timeout used when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const API_KEY_VAR: &str = "BSCSCAN_API_KEY";
pub const NETWORK_VAR: &str = "BSCSCAN_NETWORK";
pub const BASE_URL_VAR: &str = "BSCSCAN_BASE_URL";
pub const TIMEOUT_SECS_VAR: &str = "BSCSCAN_TIMEOUT_SECS";
pub const USER_AGENT_VAR: &str = "BSCSCAN_USER_AGENT";

/// Explorer deployment to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Network {
    #[default]
    BscMainnet,
    BscTestnet,
}

impl Network {
    /// API endpoint of the network's explorer.
    #[must_use]
    pub const fn base_url(&self) -> &'static str {
        match self {
            Network::BscMainnet => "https://api.bscscan.com/api",
            Network::BscTestnet => "https://api-testnet.bscscan.com/api",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::BscMainnet => write!(f, "bsc-mainnet"),
            Network::BscTestnet => write!(f, "bsc-testnet"),
        }
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bsc-mainnet" | "mainnet" | "main" | "bsc" => Ok(Network::BscMainnet),
            "bsc-testnet" | "testnet" | "test" => Ok(Network::BscTestnet),
            _ => Err(format!("Unknown network: {}", s)),
        }
    }
}

/// Explorer client settings.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// Explorer API key, sent as `apikey` on every request
    pub api_key: Option<String>,

    /// Network whose public endpoint is used when `base_url` is unset
    pub network: Network,

    /// Explicit endpoint, e.g. a self-hosted Etherscan-compatible explorer
    pub base_url: Option<String>,

    /// Request timeout of the built-in transport, in seconds
    pub timeout_secs: u64,

    /// `User-Agent` header of the built-in transport
    pub user_agent: Option<String>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            network: Network::default(),
            base_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl fmt::Debug for ClientSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("network", &self.network)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientSettings {
    /// Parses settings from a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> ScanResult<Self> {
        toml::from_str(content)
            .map_err(|e| ScanError::configuration(format!("Failed to parse settings: {e}")))
    }

    /// Reads settings from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ScanResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ScanError::configuration(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Default settings overridden by the `BSCSCAN_*` environment variables.
    pub fn from_env() -> ScanResult<Self> {
        Self::default().merge_vars(std::env::vars())
    }

    /// Overrides fields with the recognised `BSCSCAN_*` entries of `vars`.
    pub fn merge_vars<I, K, V>(mut self, vars: I) -> ScanResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, value) in vars {
            let value: String = value.into();
            match key.as_ref() {
                API_KEY_VAR => self.api_key = Some(value),
                NETWORK_VAR => {
                    self.network = value.parse().map_err(ScanError::configuration)?;
                }
                BASE_URL_VAR => self.base_url = Some(value),
                TIMEOUT_SECS_VAR => {
                    self.timeout_secs = value.parse().map_err(|_| {
                        ScanError::configuration(format!(
                            "{TIMEOUT_SECS_VAR} must be a whole number of seconds, got {value:?}"
                        ))
                    })?;
                }
                USER_AGENT_VAR => self.user_agent = Some(value),
                _ => {}
            }
        }
        Ok(self)
    }

    /// Explicit `base_url` if set, otherwise the network's endpoint.
    pub fn resolved_base_url(&self) -> ScanResult<Url> {
        let raw = self
            .base_url
            .as_deref()
            .unwrap_or_else(|| self.network.base_url());
        Url::parse(raw)
            .map_err(|e| ScanError::configuration(format!("Invalid base URL {raw:?}: {e}")))
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_point_at_mainnet() {
        let settings = ClientSettings::default();
        assert_eq!(settings.network, Network::BscMainnet);
        assert_eq!(settings.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(
            settings.resolved_base_url().unwrap().as_str(),
            "https://api.bscscan.com/api"
        );
    }

    #[test]
    fn toml_overrides_selected_fields() {
        let settings = ClientSettings::from_toml_str(
            r#"
            api_key = "ABC123"
            network = "bsc-testnet"
            timeout_secs = 5
            "#,
        )
        .unwrap();

        assert_eq!(settings.api_key.as_deref(), Some("ABC123"));
        assert_eq!(settings.network, Network::BscTestnet);
        assert_eq!(settings.timeout_secs, 5);
        assert!(settings.user_agent.is_none());
        assert_eq!(
            settings.resolved_base_url().unwrap().as_str(),
            "https://api-testnet.bscscan.com/api"
        );
    }

    #[test]
    fn invalid_toml_is_a_configuration_error() {
        let err = ClientSettings::from_toml_str("timeout_secs = \"soon\"").unwrap_err();
        assert!(matches!(err, ScanError::Configuration { .. }));
    }

    #[test]
    fn reads_settings_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_key = \"FROMFILE\"").unwrap();
        writeln!(file, "base_url = \"http://localhost:8080/api\"").unwrap();

        let settings = ClientSettings::from_file(file.path()).unwrap();
        assert_eq!(settings.api_key.as_deref(), Some("FROMFILE"));
        assert_eq!(
            settings.resolved_base_url().unwrap().as_str(),
            "http://localhost:8080/api"
        );
    }

    #[test]
    fn missing_file_is_a_configuration_error() {
        let err = ClientSettings::from_file("/nonexistent/bscscan.toml").unwrap_err();
        assert!(matches!(err, ScanError::Configuration { .. }));
    }

    #[test]
    fn environment_variables_override_defaults() {
        let vars = vec![
            (API_KEY_VAR, "ENVKEY"),
            (NETWORK_VAR, "testnet"),
            (TIMEOUT_SECS_VAR, "12"),
            ("UNRELATED", "ignored"),
        ];
        let settings = ClientSettings::default().merge_vars(vars).unwrap();
        assert_eq!(settings.api_key.as_deref(), Some("ENVKEY"));
        assert_eq!(settings.network, Network::BscTestnet);
        assert_eq!(settings.timeout_secs, 12);
    }

    #[test]
    fn bad_timeout_variable_is_rejected() {
        let err = ClientSettings::default()
            .merge_vars(vec![(TIMEOUT_SECS_VAR, "ten")])
            .unwrap_err();
        assert!(err.to_string().contains(TIMEOUT_SECS_VAR));
    }

    #[test]
    fn debug_output_hides_api_key() {
        let settings = ClientSettings {
            api_key: Some("TOPSECRET".to_string()),
            ..ClientSettings::default()
        };
        assert!(!format!("{settings:?}").contains("TOPSECRET"));
    }

    #[test]
    fn network_names_round_trip() {
        for network in [Network::BscMainnet, Network::BscTestnet] {
            assert_eq!(network.to_string().parse::<Network>().unwrap(), network);
        }
        assert!("ropsten".parse::<Network>().is_err());
    }
}
