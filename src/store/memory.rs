//! In-memory shift record store.
//!
//! Rows hold the denormalized representation: scalar inputs, the six
//! derived totals, and each line-item list as encoded text. Every
//! read-modify-write runs under a single write lock, so concurrent partial
//! updates to the same record are serialized.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::calculation::{calculate_with_unit_price, reconcile_with_unit_price};
use crate::error::{EngineError, EngineResult};
use crate::models::{DerivedTotals, LineItemKind, ShiftDraft, ShiftInput, ShiftPatch, ShiftRecord};
use crate::validation::validate_draft_with_unit_price;

use super::codec::{decode_line_items, encode_line_items};

/// The stored form of a shift record.
#[derive(Debug, Clone)]
struct StoredShift {
    id: u64,
    employee_name: String,
    clock_in: String,
    clock_out: String,
    meter_start: Decimal,
    meter_end: Decimal,
    qris_amount: Decimal,
    expenses_data: String,
    income_data: String,
    totals: DerivedTotals,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl StoredShift {
    /// Decodes the row into a record.
    fn to_record(&self) -> ShiftRecord {
        ShiftRecord {
            id: self.id,
            employee_name: self.employee_name.clone(),
            clock_in: self.clock_in.clone(),
            clock_out: self.clock_out.clone(),
            input: ShiftInput {
                meter_start: self.meter_start,
                meter_end: self.meter_end,
                qris_amount: self.qris_amount,
                expense_items: decode_line_items(LineItemKind::Expense, &self.expenses_data),
                income_items: decode_line_items(LineItemKind::Income, &self.income_data),
            },
            totals: self.totals.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    last_id: u64,
    rows: BTreeMap<u64, StoredShift>,
}

/// Thread-safe in-memory store for shift records.
///
/// Totals are computed at the store's unit price on create and whenever an
/// update touches a financial field.
///
/// # Example
///
/// ```
/// use setoran_engine::calculation::UNIT_PRICE;
/// use setoran_engine::models::{ShiftDraft, ShiftInput};
/// use setoran_engine::store::ShiftStore;
/// use rust_decimal::Decimal;
///
/// # #[tokio::main]
/// # async fn main() {
/// let store = ShiftStore::new(UNIT_PRICE);
/// let record = store
///     .create(ShiftDraft {
///         employee_name: "Budi".to_string(),
///         clock_in: "07:00".to_string(),
///         clock_out: "15:00".to_string(),
///         input: ShiftInput::new(Decimal::new(1000, 0), Decimal::new(1050, 0)),
///     })
///     .await
///     .unwrap();
/// assert_eq!(record.totals.gross_sale, Decimal::new(575000, 0));
/// # }
/// ```
#[derive(Debug)]
pub struct ShiftStore {
    inner: RwLock<Inner>,
    unit_price: Decimal,
}

impl ShiftStore {
    /// Creates an empty store that prices fuel at `unit_price`.
    pub fn new(unit_price: Decimal) -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
            unit_price,
        }
    }

    /// Returns the unit price used for calculations.
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Validates a draft, calculates its totals, and stores it.
    ///
    /// Nothing is stored if validation fails.
    pub async fn create(&self, draft: ShiftDraft) -> EngineResult<ShiftRecord> {
        validate_draft_with_unit_price(&draft, self.unit_price)?;

        let totals = calculate_with_unit_price(&draft.input, self.unit_price);
        let expenses_data = encode_line_items(&draft.input.expense_items)?;
        let income_data = encode_line_items(&draft.input.income_items)?;

        let mut inner = self.inner.write().await;
        let id = inner.last_id + 1;

        let row = StoredShift {
            id,
            employee_name: draft.employee_name,
            clock_in: draft.clock_in,
            clock_out: draft.clock_out,
            meter_start: draft.input.meter_start,
            meter_end: draft.input.meter_end,
            qris_amount: draft.input.qris_amount,
            expenses_data,
            income_data,
            totals,
            created_at: Utc::now(),
            updated_at: None,
        };

        let record = row.to_record();
        inner.rows.insert(id, row);
        inner.last_id = id;

        info!(
            record_id = id,
            employee = %record.employee_name,
            net_total = %record.totals.net_total,
            "Setoran record created"
        );
        Ok(record)
    }

    /// Returns a record by ID.
    pub async fn get(&self, id: u64) -> EngineResult<ShiftRecord> {
        let inner = self.inner.read().await;
        inner
            .rows
            .get(&id)
            .map(StoredShift::to_record)
            .ok_or(EngineError::RecordNotFound { id })
    }

    /// Returns up to `limit` records in ID order, after skipping `skip`.
    pub async fn list(&self, skip: usize, limit: usize) -> Vec<ShiftRecord> {
        let inner = self.inner.read().await;
        inner
            .rows
            .values()
            .skip(skip)
            .take(limit)
            .map(StoredShift::to_record)
            .collect()
    }

    /// Applies a partial update to a stored record.
    ///
    /// Read, merge, recalculation and write happen under one write lock.
    /// A line-item blob is only rewritten when the patch replaces that
    /// list. On any error the stored record is left untouched.
    pub async fn update(&self, id: u64, patch: &ShiftPatch) -> EngineResult<ShiftRecord> {
        let mut inner = self.inner.write().await;
        let row = inner
            .rows
            .get_mut(&id)
            .ok_or(EngineError::RecordNotFound { id })?;

        let current = row.to_record();
        let updated = reconcile_with_unit_price(&current, patch, self.unit_price)?;

        let expenses_data = match &patch.expense_items {
            Some(_) => Some(encode_line_items(&updated.input.expense_items)?),
            None => None,
        };
        let income_data = match &patch.income_items {
            Some(_) => Some(encode_line_items(&updated.input.income_items)?),
            None => None,
        };

        row.employee_name = updated.employee_name;
        row.clock_in = updated.clock_in;
        row.clock_out = updated.clock_out;
        row.meter_start = updated.input.meter_start;
        row.meter_end = updated.input.meter_end;
        row.qris_amount = updated.input.qris_amount;
        if let Some(blob) = expenses_data {
            row.expenses_data = blob;
        }
        if let Some(blob) = income_data {
            row.income_data = blob;
        }
        row.totals = updated.totals;
        row.updated_at = Some(Utc::now());

        debug!(
            record_id = id,
            recalculated = patch.touches_financials(),
            "Setoran record updated"
        );
        Ok(row.to_record())
    }

    /// Deletes a record.
    pub async fn delete(&self, id: u64) -> EngineResult<()> {
        let mut inner = self.inner.write().await;
        inner
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(EngineError::RecordNotFound { id })
    }

    /// Returns the number of stored records.
    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    /// Returns true if no records are stored.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.rows.is_empty()
    }
}
