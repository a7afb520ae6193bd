//! Configuration management for the lead intake relay.

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use leadrelay_delivery::{ClientConfig, DEFAULT_TIMEOUT_SECONDS};
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "config.toml";

/// Complete service configuration with defaults, file, and environment
/// overrides.
///
/// Configuration is loaded in priority order:
/// 1. Environment variables (highest priority)
/// 2. Configuration file (`config.toml`)
/// 3. Built-in defaults (lowest priority)
///
/// The service works out-of-the-box: every knob has a hardcoded default
/// matching the original deployment, so an empty environment still
/// yields a runnable relay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Downstream automation endpoint receiving the normalized records.
    ///
    /// Environment variable: `ZAPIER_WEBHOOK_URL` (figment lowercases
    /// environment keys, hence the alias casing).
    #[serde(default = "default_downstream_url", alias = "zapier_webhook_url")]
    pub downstream_url: String,

    /// Server bind address.
    ///
    /// Environment variable: `HOST`
    #[serde(default = "default_host", alias = "HOST")]
    pub host: String,

    /// Server bind port.
    ///
    /// Environment variable: `PORT`
    #[serde(default = "default_port", alias = "PORT")]
    pub port: u16,

    /// Debug flag; widens the default log filter.
    ///
    /// Environment variable: `DEBUG`
    #[serde(default, alias = "DEBUG")]
    pub debug: bool,

    /// Timeout for the outbound forwarding request in seconds.
    ///
    /// Environment variable: `DELIVERY_TIMEOUT_SECONDS`
    #[serde(default = "default_delivery_timeout", alias = "DELIVERY_TIMEOUT_SECONDS")]
    pub delivery_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from defaults, config file, and environment
    /// variable overrides.
    pub fn load() -> Result<Self> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(""));

        let config: Self = figment.extract().context("Failed to load configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Convert to the delivery crate's client configuration.
    pub fn to_client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.delivery_timeout_seconds),
            ..ClientConfig::default()
        }
    }

    /// Parse server socket address from host and port configuration.
    pub fn parse_server_addr(&self) -> Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.host, self.port);
        SocketAddr::from_str(&addr_str).context("Invalid server address")
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        if self.port == 0 {
            anyhow::bail!("port must be greater than 0");
        }

        if !self.downstream_url.starts_with("http://") && !self.downstream_url.starts_with("https://")
        {
            anyhow::bail!("downstream_url must be an http(s) URL");
        }

        if self.delivery_timeout_seconds == 0 {
            anyhow::bail!("delivery_timeout_seconds must be greater than 0");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            downstream_url: default_downstream_url(),
            host: default_host(),
            port: default_port(),
            debug: false,
            delivery_timeout_seconds: default_delivery_timeout(),
        }
    }
}

fn default_downstream_url() -> String {
    "https://hooks.zapier.com/hooks/catch/11662046/uu00807/".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_delivery_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}
