//! Setoran Engine for fuel-station shift reconciliation
//!
//! This crate computes the cash an attendant must hand over at the end of a
//! shift from meter readings, QRIS payments, and expense and income line
//! items. It keeps stored totals consistent with their inputs across partial
//! updates and serves the whole workflow over an HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod validation;
