//! Persisted shift report models.
//!
//! [`ShiftDraft`] is what a caller submits to create a report;
//! [`ShiftRecord`] is what the store hands back, with identity, timestamps
//! and the derived totals stored alongside the inputs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DerivedTotals, ShiftInput};

/// A new shift report before it has been stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftDraft {
    /// The attendant's name.
    pub employee_name: String,
    /// Clock-in time (HH:MM).
    pub clock_in: String,
    /// Clock-out time (HH:MM).
    pub clock_out: String,
    /// The financial inputs.
    #[serde(flatten)]
    pub input: ShiftInput,
}

/// A stored shift report.
///
/// Serializes flat: input and totals fields appear at the top level next
/// to the identity fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Store-assigned identifier.
    pub id: u64,
    /// The attendant's name.
    pub employee_name: String,
    /// Clock-in time (HH:MM).
    pub clock_in: String,
    /// Clock-out time (HH:MM).
    pub clock_out: String,
    /// The financial inputs.
    #[serde(flatten)]
    pub input: ShiftInput,
    /// Totals derived from `input`.
    #[serde(flatten)]
    pub totals: DerivedTotals,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated, if ever.
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LineItem;
    use rust_decimal::Decimal;

    #[test]
    fn test_draft_deserializes_flat_json() {
        let json = r#"{
            "employee_name": "Budi",
            "clock_in": "07:00",
            "clock_out": "15:00",
            "meter_start": 1000,
            "meter_end": 1050,
            "qris_amount": 200000,
            "expense_items": [{"id": "e1", "description": "oil", "amount": 50000}]
        }"#;

        let draft: ShiftDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.employee_name, "Budi");
        assert_eq!(draft.input.meter_end, Decimal::new(1050, 0));
        assert_eq!(
            draft.input.expense_items,
            vec![LineItem::new("e1", "oil", Decimal::new(50000, 0))]
        );
        assert!(draft.input.income_items.is_empty());
    }

    #[test]
    fn test_record_serializes_flat() {
        let record = ShiftRecord {
            id: 1,
            employee_name: "Budi".to_string(),
            clock_in: "07:00".to_string(),
            clock_out: "15:00".to_string(),
            input: ShiftInput::new(Decimal::new(1000, 0), Decimal::new(1050, 0)),
            totals: DerivedTotals::default(),
            created_at: Utc::now(),
            updated_at: None,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["meter_start"], "1000");
        assert_eq!(json["net_total"], "0");
        assert!(json["updated_at"].is_null());
        assert!(json.get("input").is_none());
    }
}
