//! Calculation logic for the Setoran Engine.
//!
//! This module turns the raw inputs of a shift report into its derived
//! totals: liters from meter readings, gross sale at the unit price, the
//! QRIS/cash split, expense and income aggregation, and the net settlement
//! figure. It also holds the reconciliation rule that decides when a
//! partial update must recompute stored totals.

mod line_items;
mod meter;
mod payment;
mod reconcile;
mod totals;

pub use line_items::sum_line_items;
pub use meter::{UNIT_PRICE, gross_sale, total_liters};
pub use payment::cash_portion;
pub use reconcile::{is_consistent, reconcile, reconcile_with_unit_price};
pub use totals::{calculate, calculate_with_unit_price, preview, preview_with_unit_price};
