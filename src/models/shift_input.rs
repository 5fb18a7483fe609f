//! Shift input model.
//!
//! This module defines [`ShiftInput`], the raw figures an attendant submits
//! at the end of a shift and the only thing the calculation engine reads.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{LineItem, ShiftPatch};

/// The financially significant inputs of a shift report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftInput {
    /// Pump meter reading at the start of the shift.
    pub meter_start: Decimal,
    /// Pump meter reading at the end of the shift.
    pub meter_end: Decimal,
    /// Amount paid electronically through QRIS.
    #[serde(default)]
    pub qris_amount: Decimal,
    /// Money paid out during the shift.
    #[serde(default)]
    pub expense_items: Vec<LineItem>,
    /// Money received outside of fuel sales.
    #[serde(default)]
    pub income_items: Vec<LineItem>,
}

impl ShiftInput {
    /// Creates an input with meter readings only.
    pub fn new(meter_start: Decimal, meter_end: Decimal) -> Self {
        Self {
            meter_start,
            meter_end,
            qris_amount: Decimal::ZERO,
            expense_items: Vec::new(),
            income_items: Vec::new(),
        }
    }

    /// Overlays the financial fields of a patch onto this input.
    ///
    /// Fields absent from the patch keep their current value. Display
    /// fields on the patch are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use setoran_engine::models::{ShiftInput, ShiftPatch};
    /// use rust_decimal::Decimal;
    ///
    /// let input = ShiftInput::new(Decimal::new(1000, 0), Decimal::new(1050, 0));
    /// let patch = ShiftPatch {
    ///     meter_end: Some(Decimal::new(1080, 0)),
    ///     ..ShiftPatch::default()
    /// };
    ///
    /// let merged = input.overlay(&patch);
    /// assert_eq!(merged.meter_start, Decimal::new(1000, 0));
    /// assert_eq!(merged.meter_end, Decimal::new(1080, 0));
    /// ```
    pub fn overlay(&self, patch: &ShiftPatch) -> ShiftInput {
        ShiftInput {
            meter_start: patch.meter_start.unwrap_or(self.meter_start),
            meter_end: patch.meter_end.unwrap_or(self.meter_end),
            qris_amount: patch.qris_amount.unwrap_or(self.qris_amount),
            expense_items: patch
                .expense_items
                .clone()
                .unwrap_or_else(|| self.expense_items.clone()),
            income_items: patch
                .income_items
                .clone()
                .unwrap_or_else(|| self.income_items.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_input() -> ShiftInput {
        ShiftInput {
            meter_start: Decimal::new(1000, 0),
            meter_end: Decimal::new(1050, 0),
            qris_amount: Decimal::new(200000, 0),
            expense_items: vec![LineItem::new("e1", "oil", Decimal::new(50000, 0))],
            income_items: vec![],
        }
    }

    #[test]
    fn test_overlay_with_empty_patch_is_identity() {
        let input = base_input();
        assert_eq!(input.overlay(&ShiftPatch::default()), input);
    }

    #[test]
    fn test_overlay_replaces_whole_lists() {
        let input = base_input();
        let patch = ShiftPatch {
            expense_items: Some(vec![]),
            income_items: Some(vec![LineItem::new("i1", "tip", Decimal::new(5000, 0))]),
            ..ShiftPatch::default()
        };

        let merged = input.overlay(&patch);
        assert!(merged.expense_items.is_empty());
        assert_eq!(merged.income_items.len(), 1);
        assert_eq!(merged.qris_amount, input.qris_amount);
    }

    #[test]
    fn test_overlay_ignores_display_fields() {
        let input = base_input();
        let patch = ShiftPatch {
            employee_name: Some("Budi".to_string()),
            ..ShiftPatch::default()
        };
        assert_eq!(input.overlay(&patch), input);
    }

    #[test]
    fn test_deserialization_defaults_optional_fields() {
        let json = r#"{"meter_start": 1000, "meter_end": 1050}"#;
        let input: ShiftInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.qris_amount, Decimal::ZERO);
        assert!(input.expense_items.is_empty());
        assert!(input.income_items.is_empty());
    }
}
