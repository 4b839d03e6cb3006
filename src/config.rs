use crate::refi::INIT_CODE_HASH;
use alloy::primitives::{Address, B256};
use anyhow::{anyhow, Context, Result};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub network: NetworkConfig,
    pub aave: AaveConfig,
    pub uniswap: UniswapConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NetworkConfig {
    pub name: String,
    pub chain_id: u64,
    pub rpc_urls: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AaveConfig {
    /// LendingPoolAddressesProvider, resolved on startup when set
    #[serde(default)]
    pub addresses_provider: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UniswapConfig {
    #[serde(default)]
    pub router: Option<String>,
    pub init_code_hash: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub supports_credentials: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8081,
                log_level: "info".to_string(),
                api_key: None,
            },
            network: NetworkConfig {
                name: "kovan".to_string(),
                chain_id: 42,
                rpc_urls: vec![],
            },
            aave: AaveConfig::default(),
            uniswap: UniswapConfig {
                router: None,
                init_code_hash: INIT_CODE_HASH.to_string(),
            },
            cors: CorsConfig {
                allowed_origins: vec!["http://localhost:3000".to_string()],
                allowed_methods: vec!["GET".to_string(), "PUT".to_string()],
                allowed_headers: vec![
                    "Authorization".to_string(),
                    "X-API-Key".to_string(),
                    "Accept".to_string(),
                    "Content-Type".to_string(),
                ],
                supports_credentials: true,
            },
        }
    }
}

fn parse_optional_address(field: &str, value: &Option<String>) -> Result<Option<Address>> {
    value
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(|s| {
            s.trim()
                .parse::<Address>()
                .with_context(|| format!("Invalid {} address: {}", field, s))
        })
        .transpose()
}

impl NetworkConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.rpc_urls.is_empty() {
            return Err(anyhow!("No RPC endpoint configured for {}", self.name));
        }

        if self.rpc_urls.iter().any(|url| url.trim().is_empty()) {
            return Err(anyhow!("Empty RPC endpoint configured for {}", self.name));
        }

        Ok(())
    }
}

impl AaveConfig {
    pub fn addresses_provider(&self) -> Result<Option<Address>> {
        parse_optional_address("Aave addresses provider", &self.addresses_provider)
    }
}

impl UniswapConfig {
    pub fn router(&self) -> Result<Option<Address>> {
        parse_optional_address("Uniswap router", &self.router)
    }

    pub fn init_code_hash(&self) -> Result<B256> {
        self.init_code_hash
            .trim()
            .parse::<B256>()
            .with_context(|| format!("Invalid init code hash: {}", self.init_code_hash))
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        // Try to load from config directory
        info!("Loading config from file");
        match Self::load_from_file("config/config.toml") {
            Ok(config) => {
                info!("Config loaded from file");
                Ok(config)
            }
            Err(e) => {
                error!("Failed to load config from file: {}", e);
                // Fall back to environment variables or defaults
                info!("Falling back to environment variables or defaults");
                Ok(Self::from_env())
            }
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn from_env() -> Self {
        let mut config = Config::default();

        // Override with environment variables if present
        if let Ok(host) = std::env::var("SERVER_HOST") {
            config.server.host = host;
        }

        if let Ok(port) = std::env::var("SERVER_PORT") {
            if let Ok(port_num) = port.parse::<u16>() {
                config.server.port = port_num;
            }
        }

        if let Ok(log_level) = std::env::var("RUST_LOG") {
            config.server.log_level = log_level;
        }

        if let Ok(api_key) = std::env::var("API_KEY") {
            config.server.api_key = Some(api_key);
        }

        // Network endpoint, the legacy Kovan variable is still honoured
        match std::env::var("NETWORK_ENDPOINT").or_else(|_| std::env::var("KOVAN_ENDPOINT")) {
            Ok(endpoints) => {
                config.network.rpc_urls = endpoints
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
            }
            Err(_) => warn!("NETWORK_ENDPOINT environment variable has not been set"),
        }

        if let Ok(name) = std::env::var("NETWORK_NAME") {
            config.network.name = name;
        }

        if let Ok(chain_id) = std::env::var("CHAIN_ID") {
            if let Ok(chain_id) = chain_id.parse::<u64>() {
                config.network.chain_id = chain_id;
            }
        }

        if let Ok(provider) = std::env::var("AAVE_ADDRESSES_PROVIDER") {
            config.aave.addresses_provider = Some(provider);
        }

        if let Ok(router) = std::env::var("UNISWAP_ROUTER") {
            config.uniswap.router = Some(router);
        }

        if let Ok(hash) = std::env::var("UNISWAP_INIT_CODE_HASH") {
            config.uniswap.init_code_hash = hash;
        }

        if let Ok(origins) = std::env::var("CORS_ORIGINS") {
            config.cors.allowed_origins =
                origins.split(',').map(|s| s.trim().to_string()).collect();
        }

        config
    }

    /// Check everything that is parsed lazily later on
    pub fn validate(&self) -> Result<()> {
        self.network.validate()?;
        self.aave.addresses_provider()?;
        self.uniswap.router()?;
        self.uniswap.init_code_hash()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.network.chain_id, 42);
        assert!(config.network.rpc_urls.is_empty());
        assert_eq!(config.uniswap.init_code_hash().unwrap(), INIT_CODE_HASH);
    }

    #[test]
    fn test_default_config_needs_endpoint() {
        let config = Config::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_env() {
        std::env::set_var("SERVER_PORT", "9090");
        std::env::set_var("KOVAN_ENDPOINT", "http://localhost:8545, http://localhost:8546");
        std::env::set_var(
            "UNISWAP_ROUTER",
            "0xf164fC0Ec4E93095b804a4795bBe1e041497b92a",
        );

        let config = Config::from_env();
        assert_eq!(config.server.port, 9090);
        assert_eq!(
            config.network.rpc_urls,
            vec![
                "http://localhost:8545".to_string(),
                "http://localhost:8546".to_string()
            ]
        );
        assert_eq!(
            config.uniswap.router().unwrap(),
            Some(address!("f164fC0Ec4E93095b804a4795bBe1e041497b92a"))
        );
        assert!(config.validate().is_ok());

        // Clean up
        std::env::remove_var("SERVER_PORT");
        std::env::remove_var("KOVAN_ENDPOINT");
        std::env::remove_var("UNISWAP_ROUTER");
    }

    #[test]
    fn test_invalid_addresses_fail_validation() {
        let mut config = Config::default();
        config.network.rpc_urls = vec!["http://localhost:8545".to_string()];
        config.aave.addresses_provider = Some("0x1234".to_string());
        assert!(config.validate().is_err());

        config.aave.addresses_provider = None;
        config.uniswap.init_code_hash = "not-a-hash".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_address_is_unset() {
        let aave = AaveConfig {
            addresses_provider: Some("  ".to_string()),
        };
        assert_eq!(aave.addresses_provider().unwrap(), None);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_string = toml::to_string_pretty(&config).unwrap();
        assert!(toml_string.contains("127.0.0.1"));
        assert!(toml_string.contains("8081"));
        assert!(toml_string.contains("kovan"));

        let parsed: Config = toml::from_str(&toml_string).unwrap();
        assert_eq!(parsed.network.chain_id, 42);
    }
}
