//! Validation of shift reports before they reach the calculation engine.
//!
//! The engine assumes well-formed input. Everything here runs strictly
//! before [`calculate`](crate::calculation::calculate) or
//! [`reconcile`](crate::calculation::reconcile), and the first failure is
//! returned with the offending field identified.

use chrono::NaiveTime;
use rust_decimal::Decimal;

use crate::calculation::{UNIT_PRICE, total_liters};
use crate::error::{EngineError, EngineResult};
use crate::models::{LineItem, LineItemKind, ShiftDraft, ShiftInput, ShiftPatch};

/// Validates the financial inputs of a shift at the default [`UNIT_PRICE`].
///
/// See [`validate_input_with_unit_price`].
///
/// # Examples
///
/// ```
/// use setoran_engine::models::ShiftInput;
/// use setoran_engine::validation::validate_input;
/// use rust_decimal::Decimal;
///
/// let ok = ShiftInput::new(Decimal::new(1000, 0), Decimal::new(1050, 0));
/// assert!(validate_input(&ok).is_ok());
///
/// let reversed = ShiftInput::new(Decimal::new(1050, 0), Decimal::new(1000, 0));
/// assert!(validate_input(&reversed).is_err());
/// ```
pub fn validate_input(input: &ShiftInput) -> EngineResult<()> {
    validate_input_with_unit_price(input, UNIT_PRICE)
}

/// Validates the financial inputs of a shift priced at `unit_price`.
///
/// Checks, in order: non-negative meter readings, `meter_end >= meter_start`,
/// non-negative QRIS amount, every expense and income item, and finally
/// that every derived total fits in a [`Decimal`].
pub fn validate_input_with_unit_price(input: &ShiftInput, unit_price: Decimal) -> EngineResult<()> {
    ensure_non_negative("meter_start", input.meter_start)?;
    ensure_non_negative("meter_end", input.meter_end)?;

    if input.meter_end < input.meter_start {
        return Err(EngineError::InvalidRange {
            meter_start: input.meter_start,
            meter_end: input.meter_end,
        });
    }

    ensure_non_negative("qris_amount", input.qris_amount)?;
    validate_line_items(LineItemKind::Expense, &input.expense_items)?;
    validate_line_items(LineItemKind::Income, &input.income_items)?;
    ensure_calculable(input, unit_price)
}

/// Replays the calculation with checked arithmetic.
///
/// Fails with the field whose value pushes a total past [`Decimal::MAX`].
fn ensure_calculable(input: &ShiftInput, unit_price: Decimal) -> EngineResult<()> {
    let gross_sale = total_liters(input.meter_start, input.meter_end)
        .checked_mul(unit_price)
        .ok_or_else(|| too_large("meter_end"))?;
    let cash_portion = gross_sale
        .checked_sub(input.qris_amount)
        .ok_or_else(|| too_large("qris_amount"))?
        .max(Decimal::ZERO);

    let total_expenses = checked_line_item_sum(LineItemKind::Expense, &input.expense_items)?;
    let total_income = checked_line_item_sum(LineItemKind::Income, &input.income_items)?;

    cash_portion
        .checked_add(total_income)
        .ok_or_else(|| too_large("income_items"))?
        .checked_sub(total_expenses)
        .ok_or_else(|| too_large("expense_items"))?;
    Ok(())
}

fn checked_line_item_sum(kind: LineItemKind, items: &[LineItem]) -> EngineResult<Decimal> {
    items
        .iter()
        .filter(|item| item.counts_toward_total())
        .try_fold(Decimal::ZERO, |total, item| total.checked_add(item.amount))
        .ok_or_else(|| too_large(&format!("{}_items", kind.label())))
}

fn too_large(field: &str) -> EngineError {
    EngineError::InvalidField {
        field: field.to_string(),
        message: "value too large to calculate".to_string(),
    }
}

/// Validates every item of one line-item list.
///
/// Zero amounts are allowed here even though aggregation skips them.
pub fn validate_line_items(kind: LineItemKind, items: &[LineItem]) -> EngineResult<()> {
    for item in items {
        if item.description.trim().is_empty() {
            return Err(EngineError::InvalidLineItem {
                list: kind.label().to_string(),
                item_id: item.id.clone(),
                message: "description must not be empty".to_string(),
            });
        }
        if item.amount < Decimal::ZERO {
            return Err(EngineError::InvalidLineItem {
                list: kind.label().to_string(),
                item_id: item.id.clone(),
                message: "amount must not be negative".to_string(),
            });
        }
    }
    Ok(())
}

/// Validates a complete draft at the default [`UNIT_PRICE`].
pub fn validate_draft(draft: &ShiftDraft) -> EngineResult<()> {
    validate_draft_with_unit_price(draft, UNIT_PRICE)
}

/// Validates a complete draft: display fields, then financial inputs.
pub fn validate_draft_with_unit_price(draft: &ShiftDraft, unit_price: Decimal) -> EngineResult<()> {
    validate_employee_name(&draft.employee_name)?;
    validate_clock_time("clock_in", &draft.clock_in)?;
    validate_clock_time("clock_out", &draft.clock_out)?;
    validate_input_with_unit_price(&draft.input, unit_price)
}

/// Validates the display fields a patch sets.
///
/// Financial fields are checked after they are merged with the stored
/// record, since a lone `meter_end` can only be range-checked against the
/// stored `meter_start`.
pub fn validate_patch_display_fields(patch: &ShiftPatch) -> EngineResult<()> {
    if let Some(name) = &patch.employee_name {
        validate_employee_name(name)?;
    }
    if let Some(clock_in) = &patch.clock_in {
        validate_clock_time("clock_in", clock_in)?;
    }
    if let Some(clock_out) = &patch.clock_out {
        validate_clock_time("clock_out", clock_out)?;
    }
    Ok(())
}

/// Validates that an employee name is not blank.
pub fn validate_employee_name(name: &str) -> EngineResult<()> {
    if name.trim().is_empty() {
        return Err(EngineError::InvalidField {
            field: "employee_name".to_string(),
            message: "must not be empty".to_string(),
        });
    }
    Ok(())
}

/// Validates a wall-clock time in `H:MM` or `HH:MM` form (00:00 to 23:59).
///
/// # Examples
///
/// ```
/// use setoran_engine::validation::validate_clock_time;
///
/// assert!(validate_clock_time("clock_in", "7:05").is_ok());
/// assert!(validate_clock_time("clock_in", "23:59").is_ok());
/// assert!(validate_clock_time("clock_in", "24:00").is_err());
/// assert!(validate_clock_time("clock_in", "07:5").is_err());
/// ```
pub fn validate_clock_time(field: &str, value: &str) -> EngineResult<()> {
    if is_clock_time(value) {
        Ok(())
    } else {
        Err(EngineError::InvalidField {
            field: field.to_string(),
            message: format!("'{}' is not a valid HH:MM time", value),
        })
    }
}

fn is_clock_time(value: &str) -> bool {
    let Some((hours, minutes)) = value.split_once(':') else {
        return false;
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !(1..=2).contains(&hours.len())
        || minutes.len() != 2
        || !all_digits(hours)
        || !all_digits(minutes)
    {
        return false;
    }

    match (hours.parse::<u32>(), minutes.parse::<u32>()) {
        (Ok(h), Ok(m)) => NaiveTime::from_hms_opt(h, m, 0).is_some(),
        _ => false,
    }
}

fn ensure_non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::InvalidField {
            field: field.to_string(),
            message: format!("must not be negative, got {}", value),
        });
    }
    Ok(())
}
