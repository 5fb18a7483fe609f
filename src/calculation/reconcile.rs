//! Partial-update reconciliation for stored shift records.
//!
//! A patch that touches any of [`FINANCIAL_FIELDS`](crate::models::FINANCIAL_FIELDS)
//! forces a full recalculation of every derived total. A patch that
//! touches none of them leaves the stored totals exactly as they were.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{ShiftPatch, ShiftRecord};
use crate::validation::{validate_input_with_unit_price, validate_patch_display_fields};

use super::meter::UNIT_PRICE;
use super::totals::calculate_with_unit_price;

/// Applies a patch to a record at the default [`UNIT_PRICE`].
///
/// See [`reconcile_with_unit_price`].
pub fn reconcile(existing: &ShiftRecord, patch: &ShiftPatch) -> EngineResult<ShiftRecord> {
    reconcile_with_unit_price(existing, patch, UNIT_PRICE)
}

/// Applies a patch to a record, recomputing derived totals when required.
///
/// When the patch touches a financial field, the patch is overlaid onto the
/// record's current inputs, the merged input is validated, and all six
/// derived totals are replaced with a fresh calculation. Display fields are
/// applied regardless. Timestamps and identity are left for the store.
///
/// Returns an error without producing a record if any patched value, or the
/// merged input, fails validation.
///
/// # Examples
///
/// ```
/// use setoran_engine::calculation::{calculate, reconcile};
/// use setoran_engine::models::{ShiftInput, ShiftPatch, ShiftRecord};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
///
/// let input = ShiftInput::new(Decimal::new(1000, 0), Decimal::new(1050, 0));
/// let record = ShiftRecord {
///     id: 1,
///     employee_name: "Budi".to_string(),
///     clock_in: "07:00".to_string(),
///     clock_out: "15:00".to_string(),
///     totals: calculate(&input),
///     input,
///     created_at: Utc::now(),
///     updated_at: None,
/// };
///
/// let patch = ShiftPatch {
///     meter_end: Some(Decimal::new(1060, 0)),
///     ..ShiftPatch::default()
/// };
/// let updated = reconcile(&record, &patch).unwrap();
/// assert_eq!(updated.totals.total_liters, Decimal::new(60, 0));
/// ```
pub fn reconcile_with_unit_price(
    existing: &ShiftRecord,
    patch: &ShiftPatch,
    unit_price: Decimal,
) -> EngineResult<ShiftRecord> {
    validate_patch_display_fields(patch)?;

    let mut updated = existing.clone();

    if patch.touches_financials() {
        let merged = existing.input.overlay(patch);
        validate_input_with_unit_price(&merged, unit_price)?;
        updated.totals = calculate_with_unit_price(&merged, unit_price);
        updated.input = merged;
    }

    if let Some(name) = &patch.employee_name {
        updated.employee_name = name.clone();
    }
    if let Some(clock_in) = &patch.clock_in {
        updated.clock_in = clock_in.clone();
    }
    if let Some(clock_out) = &patch.clock_out {
        updated.clock_out = clock_out.clone();
    }

    Ok(updated)
}

/// Returns true if the record's stored totals match a fresh calculation.
pub fn is_consistent(record: &ShiftRecord, unit_price: Decimal) -> bool {
    record.totals == calculate_with_unit_price(&record.input, unit_price)
}
