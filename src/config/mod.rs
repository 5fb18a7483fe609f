//! Configuration loading and management for the Setoran Engine.
//!
//! This module loads pricing and service settings from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use setoran_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Unit price: {}", config.unit_price());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{PricingConfig, ServerConfig, SetoranConfig};
