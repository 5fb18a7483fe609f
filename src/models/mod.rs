//! Core data models for the Setoran Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod derived_totals;
mod line_item;
mod patch;
mod shift_input;
mod shift_record;

pub use derived_totals::DerivedTotals;
pub use line_item::{LineItem, LineItemKind};
pub use patch::{FINANCIAL_FIELDS, ShiftField, ShiftPatch};
pub use shift_input::ShiftInput;
pub use shift_record::{ShiftDraft, ShiftRecord};
