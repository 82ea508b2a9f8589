//! Configuration types for rawtx.
//!
//! The configuration file is TOML with two sections:
//!
//! - `[network]` - chain id and broadcast endpoint
//! - `[defaults]` - gas defaults for the `new` command
//!
//! Every field is optional; a missing file or section yields the defaults,
//! which match mainnet and the public Etherscan proxy.

use serde::{Deserialize, Serialize};

use crate::amount::parse_integer;
use crate::error::ConfigError;

/// Default chain id (Ethereum mainnet).
pub const DEFAULT_CHAIN_ID: u64 = 1;

/// Default broadcast endpoint.
pub const DEFAULT_BROADCAST_URL: &str = "https://api.etherscan.io/api";

/// Default gas price in wei.
pub const DEFAULT_GAS_PRICE: &str = "4000000000";

/// Default gas limit.
pub const DEFAULT_GAS_LIMIT: &str = "100000";

/// Top-level rawtx configuration.
///
/// # Examples
///
/// ```
/// use rawtx_core::config::Config;
///
/// let toml_str = r#"
/// [network]
/// chain_id = 5
/// broadcast_url = "https://api-goerli.etherscan.io/api"
///
/// [defaults]
/// gas_limit = "21000"
/// "#;
///
/// let config: Config = toml::from_str(toml_str).expect("valid TOML");
/// assert_eq!(config.network.chain_id, 5);
/// assert_eq!(config.defaults.gas_limit, "21000");
/// assert_eq!(config.defaults.gas_price, "4000000000");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Network and broadcast settings.
    #[serde(default)]
    pub network: NetworkConfig,

    /// Default transaction parameters.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

const fn default_chain_id() -> u64 {
    DEFAULT_CHAIN_ID
}

fn default_broadcast_url() -> String {
    DEFAULT_BROADCAST_URL.to_string()
}

fn default_gas_price() -> String {
    DEFAULT_GAS_PRICE.to_string()
}

fn default_gas_limit() -> String {
    DEFAULT_GAS_LIMIT.to_string()
}

/// Network settings used for signing and broadcasting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NetworkConfig {
    /// EIP-155 chain id bound into every signature.
    ///
    /// Default: 1 (mainnet)
    #[serde(default = "default_chain_id")]
    pub chain_id: u64,

    /// Etherscan-compatible proxy endpoint used by `push`.
    ///
    /// Default: `https://api.etherscan.io/api`
    #[serde(default = "default_broadcast_url")]
    pub broadcast_url: String,

    /// Optional API key appended as the `apikey` query parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Request timeout in seconds. The HTTP client default applies when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            chain_id: default_chain_id(),
            broadcast_url: default_broadcast_url(),
            api_key: None,
            timeout_secs: None,
        }
    }
}

/// Defaults applied by `new` when the corresponding flag is omitted.
///
/// Values are base-10 integer strings so they can exceed 64 bits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Gas price in wei.
    #[serde(default = "default_gas_price")]
    pub gas_price: String,

    /// Gas limit.
    #[serde(default = "default_gas_limit")]
    pub gas_limit: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            gas_price: default_gas_price(),
            gas_limit: default_gas_limit(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if:
    /// - `network.chain_id` is zero
    /// - `network.broadcast_url` is empty
    /// - `network.timeout_secs` is zero
    /// - `defaults.gas_price` or `defaults.gas_limit` is not a base-10 integer
    ///
    /// # Examples
    ///
    /// ```
    /// use rawtx_core::config::Config;
    ///
    /// assert!(Config::default().validate().is_ok());
    ///
    /// let mut config = Config::default();
    /// config.network.chain_id = 0;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.network.chain_id == 0 {
            return Err(ConfigError::invalid_value("network.chain_id", "0"));
        }

        if self.network.broadcast_url.is_empty() {
            return Err(ConfigError::invalid_value(
                "network.broadcast_url",
                "<empty>",
            ));
        }

        if self.network.timeout_secs == Some(0) {
            return Err(ConfigError::invalid_value("network.timeout_secs", "0"));
        }

        if parse_integer(&self.defaults.gas_price).is_none() {
            return Err(ConfigError::invalid_value(
                "defaults.gas_price",
                &self.defaults.gas_price,
            ));
        }

        if parse_integer(&self.defaults.gas_limit).is_none() {
            return Err(ConfigError::invalid_value(
                "defaults.gas_limit",
                &self.defaults.gas_limit,
            ));
        }

        Ok(())
    }
}
