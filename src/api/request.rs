//! Request types for the Setoran Engine API.
//!
//! This module defines the JSON request structures for the setoran
//! endpoints and their conversion into domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::{LineItem, ShiftDraft, ShiftInput, ShiftPatch};

/// Request body for `POST /api/setoran`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetoranCreateRequest {
    /// The attendant's name.
    pub employee_name: String,
    /// Clock-in time (HH:MM).
    pub clock_in: String,
    /// Clock-out time (HH:MM).
    pub clock_out: String,
    /// Opening meter reading.
    pub meter_start: Decimal,
    /// Closing meter reading.
    pub meter_end: Decimal,
    /// Amount paid through QRIS.
    #[serde(default)]
    pub qris_amount: Decimal,
    /// Expense entries.
    #[serde(default)]
    pub expense_items: Vec<LineItem>,
    /// Income entries.
    #[serde(default)]
    pub income_items: Vec<LineItem>,
}

/// Request body for `PUT /api/setoran/:id`.
///
/// Absent fields are unchanged. An explicit `null` is rejected rather than
/// read as "unchanged", so a client can never clear a field by accident.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetoranUpdateRequest {
    /// New attendant name.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    /// New clock-in time.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub clock_in: Option<String>,
    /// New clock-out time.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub clock_out: Option<String>,
    /// New opening meter reading.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub meter_start: Option<Decimal>,
    /// New closing meter reading.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub meter_end: Option<Decimal>,
    /// New QRIS amount.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub qris_amount: Option<Decimal>,
    /// Replacement expense list.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub expense_items: Option<Vec<LineItem>>,
    /// Replacement income list.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub income_items: Option<Vec<LineItem>>,
}

/// Deserializes a field that is present in the body. `null` is an error.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Request body for `POST /api/setoran/calculate`.
///
/// Only the financial fields are read; anything else in the body is
/// ignored, so a full create payload can be previewed as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Opening meter reading.
    pub meter_start: Decimal,
    /// Closing meter reading.
    pub meter_end: Decimal,
    /// Amount paid through QRIS.
    #[serde(default)]
    pub qris_amount: Decimal,
    /// Expense entries.
    #[serde(default)]
    pub expense_items: Vec<LineItem>,
    /// Income entries.
    #[serde(default)]
    pub income_items: Vec<LineItem>,
}

/// Query parameters for `GET /api/setoran`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListParams {
    /// Number of records to skip.
    #[serde(default)]
    pub skip: usize,
    /// Maximum number of records to return.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    100
}

impl From<SetoranCreateRequest> for ShiftDraft {
    fn from(req: SetoranCreateRequest) -> Self {
        ShiftDraft {
            employee_name: req.employee_name,
            clock_in: req.clock_in,
            clock_out: req.clock_out,
            input: ShiftInput {
                meter_start: req.meter_start,
                meter_end: req.meter_end,
                qris_amount: req.qris_amount,
                expense_items: req.expense_items,
                income_items: req.income_items,
            },
        }
    }
}

impl From<SetoranUpdateRequest> for ShiftPatch {
    fn from(req: SetoranUpdateRequest) -> Self {
        ShiftPatch {
            employee_name: req.employee_name,
            clock_in: req.clock_in,
            clock_out: req.clock_out,
            meter_start: req.meter_start,
            meter_end: req.meter_end,
            qris_amount: req.qris_amount,
            expense_items: req.expense_items,
            income_items: req.income_items,
        }
    }
}

impl From<CalculationRequest> for ShiftInput {
    fn from(req: CalculationRequest) -> Self {
        ShiftInput {
            meter_start: req.meter_start,
            meter_end: req.meter_end,
            qris_amount: req.qris_amount,
            expense_items: req.expense_items,
            income_items: req.income_items,
        }
    }
}
