//! Derived totals produced by the calculation engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The six figures derived from a [`ShiftInput`](super::ShiftInput).
///
/// These are never independent truth: a stored copy must always equal a
/// fresh calculation over the record's own inputs.
///
/// # Example
///
/// ```
/// use setoran_engine::models::DerivedTotals;
/// use rust_decimal::Decimal;
///
/// let totals = DerivedTotals::default();
/// assert_eq!(totals.net_total, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedTotals {
    /// Liters dispensed, never negative.
    pub total_liters: Decimal,
    /// Liters times the unit price.
    pub gross_sale: Decimal,
    /// Gross sale minus QRIS, floored at zero.
    pub cash_portion: Decimal,
    /// Sum of counted expense items.
    pub total_expenses: Decimal,
    /// Sum of counted income items.
    pub total_income: Decimal,
    /// Cash plus income minus expenses. May be negative.
    pub net_total: Decimal,
}
