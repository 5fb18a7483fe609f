//! Configuration types for the Setoran Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::UNIT_PRICE;

/// Fuel pricing, from `pricing.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// Price of one liter in currency minor units.
    #[serde(default = "default_unit_price")]
    pub unit_price: Decimal,
    /// Currency code used for display.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_unit_price() -> Decimal {
    UNIT_PRICE
}

fn default_currency() -> String {
    "IDR".to_string()
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            unit_price: default_unit_price(),
            currency: default_currency(),
        }
    }
}

/// HTTP service settings, from `server.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// API title shown at the root endpoint.
    pub title: String,
    /// API version shown at the root endpoint.
    pub version: String,
    /// Short description of the API.
    #[serde(default)]
    pub description: String,
    /// Address to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind to.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Origins allowed by CORS. Entries may contain a `*` wildcard.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            title: "Setoran Harian API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: String::new(),
            host: default_host(),
            port: default_port(),
            allowed_origins: Vec::new(),
        }
    }
}

/// The complete configuration loaded from a configuration directory.
#[derive(Debug, Clone, Default)]
pub struct SetoranConfig {
    pricing: PricingConfig,
    server: ServerConfig,
}

impl SetoranConfig {
    /// Creates a new SetoranConfig from its component parts.
    pub fn new(pricing: PricingConfig, server: ServerConfig) -> Self {
        Self { pricing, server }
    }

    /// Returns the pricing configuration.
    pub fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    /// Returns the server configuration.
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    pub(crate) fn server_mut(&mut self) -> &mut ServerConfig {
        &mut self.server
    }
}
