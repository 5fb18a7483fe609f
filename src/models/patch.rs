//! Partial update model.
//!
//! A [`ShiftPatch`] carries the fields a caller wants to change on an
//! existing record. Which of those fields are financially significant is
//! decided by [`FINANCIAL_FIELDS`], not by ad-hoc checks at call sites.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::LineItem;

/// A patchable field of a shift record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftField {
    /// The attendant's name.
    EmployeeName,
    /// Clock-in time.
    ClockIn,
    /// Clock-out time.
    ClockOut,
    /// Opening meter reading.
    MeterStart,
    /// Closing meter reading.
    MeterEnd,
    /// QRIS payment amount.
    QrisAmount,
    /// Expense line items.
    ExpenseItems,
    /// Income line items.
    IncomeItems,
}

/// Fields whose change forces all derived totals to be recomputed.
pub const FINANCIAL_FIELDS: [ShiftField; 5] = [
    ShiftField::MeterStart,
    ShiftField::MeterEnd,
    ShiftField::QrisAmount,
    ShiftField::ExpenseItems,
    ShiftField::IncomeItems,
];

impl ShiftField {
    /// Returns true if this field feeds the calculation.
    pub fn is_financial(&self) -> bool {
        FINANCIAL_FIELDS.contains(self)
    }
}

/// A partial update to a shift record. `None` means "leave unchanged".
///
/// Built from the API's update request; it has no wire form of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftPatch {
    /// New attendant name.
    pub employee_name: Option<String>,
    /// New clock-in time (HH:MM).
    pub clock_in: Option<String>,
    /// New clock-out time (HH:MM).
    pub clock_out: Option<String>,
    /// New opening meter reading.
    pub meter_start: Option<Decimal>,
    /// New closing meter reading.
    pub meter_end: Option<Decimal>,
    /// New QRIS amount.
    pub qris_amount: Option<Decimal>,
    /// Replacement expense list.
    pub expense_items: Option<Vec<LineItem>>,
    /// Replacement income list.
    pub income_items: Option<Vec<LineItem>>,
}

impl ShiftPatch {
    /// Returns the fields this patch sets, in declaration order.
    pub fn touched_fields(&self) -> Vec<ShiftField> {
        let present = [
            (ShiftField::EmployeeName, self.employee_name.is_some()),
            (ShiftField::ClockIn, self.clock_in.is_some()),
            (ShiftField::ClockOut, self.clock_out.is_some()),
            (ShiftField::MeterStart, self.meter_start.is_some()),
            (ShiftField::MeterEnd, self.meter_end.is_some()),
            (ShiftField::QrisAmount, self.qris_amount.is_some()),
            (ShiftField::ExpenseItems, self.expense_items.is_some()),
            (ShiftField::IncomeItems, self.income_items.is_some()),
        ];

        present
            .into_iter()
            .filter_map(|(field, set)| set.then_some(field))
            .collect()
    }

    /// Returns true if any touched field is in [`FINANCIAL_FIELDS`].
    ///
    /// # Examples
    ///
    /// ```
    /// use setoran_engine::models::ShiftPatch;
    /// use rust_decimal::Decimal;
    ///
    /// let rename = ShiftPatch {
    ///     employee_name: Some("Siti".to_string()),
    ///     ..ShiftPatch::default()
    /// };
    /// assert!(!rename.touches_financials());
    ///
    /// let qris = ShiftPatch {
    ///     qris_amount: Some(Decimal::ZERO),
    ///     ..ShiftPatch::default()
    /// };
    /// assert!(qris.touches_financials());
    /// ```
    pub fn touches_financials(&self) -> bool {
        self.touched_fields().iter().any(ShiftField::is_financial)
    }

    /// Returns true if the patch sets nothing.
    pub fn is_empty(&self) -> bool {
        self.touched_fields().is_empty()
    }
}
