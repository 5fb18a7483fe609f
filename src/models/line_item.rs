//! Line item model for expense and income entries.
//!
//! A shift report carries two free-form lists of labeled amounts: money
//! the attendant paid out during the shift and money received outside of
//! fuel sales.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single labeled expense or income entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Opaque identifier assigned by the caller, unique within its list.
    pub id: String,
    /// What the money was for. Must not be blank.
    pub description: String,
    /// The amount. Must not be negative.
    pub amount: Decimal,
}

impl LineItem {
    /// Creates a new line item.
    pub fn new(id: impl Into<String>, description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            amount,
        }
    }

    /// Returns true if this item contributes to an aggregate total.
    ///
    /// Zero-amount items are valid but excluded, as are items whose
    /// description is blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use setoran_engine::models::LineItem;
    /// use rust_decimal::Decimal;
    ///
    /// assert!(LineItem::new("1", "oil", Decimal::new(50000, 0)).counts_toward_total());
    /// assert!(!LineItem::new("2", "oil", Decimal::ZERO).counts_toward_total());
    /// assert!(!LineItem::new("3", "   ", Decimal::new(30000, 0)).counts_toward_total());
    /// ```
    pub fn counts_toward_total(&self) -> bool {
        !self.description.trim().is_empty() && self.amount > Decimal::ZERO
    }
}

/// Which list a line item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItemKind {
    /// Money paid out during the shift.
    Expense,
    /// Money received outside of fuel sales.
    Income,
}

impl LineItemKind {
    /// Returns the lowercase label used in error messages and logs.
    pub fn label(&self) -> &'static str {
        match self {
            LineItemKind::Expense => "expense",
            LineItemKind::Income => "income",
        }
    }
}

impl fmt::Display for LineItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
