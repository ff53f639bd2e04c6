//! API configuration

use core_kernel::{CoreError, Currency, Timezone};
use serde::Deserialize;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// JSON catalog export to serve; no listings when unset
    pub catalog_path: Option<String>,
    /// ISO 4217 code the catalog prices are in
    pub currency: String,
    /// IANA timezone stay dates are normalized into
    pub reference_timezone: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            catalog_path: None,
            currency: "USD".to_string(),
            reference_timezone: "UTC".to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_*` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Reads each `API_*` variable on its own
    ///
    /// A variable that is unset keeps its default, and so does one that does
    /// not parse. The names of the rejected variables are returned alongside.
    pub fn from_vars<F>(lookup: F) -> (Self, Vec<&'static str>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut rejected = Vec::new();

        if let Some(host) = lookup("API_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("API_PORT") {
            match port.trim().parse() {
                Ok(port) => config.port = port,
                Err(_) => rejected.push("API_PORT"),
            }
        }
        if let Some(level) = lookup("API_LOG_LEVEL") {
            config.log_level = level;
        }
        if let Some(path) = lookup("API_CATALOG_PATH") {
            config.catalog_path = Some(path);
        }
        if let Some(currency) = lookup("API_CURRENCY") {
            config.currency = currency;
        }
        if let Some(zone) = lookup("API_REFERENCE_TIMEZONE") {
            config.reference_timezone = zone;
        }

        (config, rejected)
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parses the configured catalog currency
    pub fn currency(&self) -> Result<Currency, CoreError> {
        self.currency
            .parse()
            .map_err(|e| CoreError::configuration("API_CURRENCY", e))
    }

    /// Parses the configured reference timezone
    pub fn timezone(&self) -> Result<Timezone, CoreError> {
        self.reference_timezone
            .parse()
            .map_err(|e| CoreError::configuration("API_REFERENCE_TIMEZONE", e))
    }
}
