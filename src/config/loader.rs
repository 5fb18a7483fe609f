//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{PricingConfig, ServerConfig, SetoranConfig};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── pricing.yaml   # Unit price per liter
/// └── server.yaml    # API metadata, listen address, CORS origins
/// ```
///
/// # Example
///
/// ```no_run
/// use setoran_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Listening on {}", loader.bind_address());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: SetoranConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The unit price is negative
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let pricing_path = path.join("pricing.yaml");
        let pricing = Self::load_yaml::<PricingConfig>(&pricing_path)?;

        if pricing.unit_price < Decimal::ZERO {
            return Err(EngineError::ConfigParseError {
                path: pricing_path.display().to_string(),
                message: format!("unit_price must not be negative, got {}", pricing.unit_price),
            });
        }

        let server_path = path.join("server.yaml");
        let server = Self::load_yaml::<ServerConfig>(&server_path)?;

        Ok(Self {
            config: SetoranConfig::new(pricing, server),
        })
    }

    /// Applies server overrides from the process environment.
    ///
    /// See [`with_overrides`](Self::with_overrides) for the variables read.
    pub fn with_env_overrides(self) -> EngineResult<Self> {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Applies server overrides looked up by variable name.
    ///
    /// | Variable | Setting |
    /// |---|---|
    /// | `SETORAN_TITLE` | `title` |
    /// | `SETORAN_HOST` | `host` |
    /// | `SETORAN_PORT` | `port` |
    /// | `SETORAN_ALLOWED_ORIGINS` | `allowed_origins`, comma-separated |
    ///
    /// Unset or empty variables leave the loaded value in place.
    pub fn with_overrides<F>(mut self, lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let server = self.config.server_mut();

        if let Some(title) = lookup("SETORAN_TITLE") {
            server.title = title;
        }
        if let Some(host) = lookup("SETORAN_HOST") {
            server.host = host.trim().to_string();
        }
        if let Some(port) = lookup("SETORAN_PORT") {
            server.port = port.trim().parse().map_err(|e| EngineError::ConfigParseError {
                path: "SETORAN_PORT".to_string(),
                message: format!("invalid port '{}': {}", port, e),
            })?;
        }
        if let Some(origins) = lookup("SETORAN_ALLOWED_ORIGINS") {
            server.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect();
        }

        Ok(self)
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: SetoranConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &SetoranConfig {
        &self.config
    }

    /// Returns the price of one liter.
    pub fn unit_price(&self) -> Decimal {
        self.config.pricing().unit_price
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        self.config.server()
    }

    /// Returns `host:port` for binding the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server().host, self.server().port)
    }
}
