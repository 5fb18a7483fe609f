//! Serialization boundary for stored line-item lists.
//!
//! Line items are persisted as JSON text next to the record's scalar
//! fields. Decoding never fails: an empty or unreadable blob degrades to an
//! empty list, with a warning for the unreadable case.

use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::{LineItem, LineItemKind};

/// Encodes a line-item list as JSON text for storage.
pub fn encode_line_items(items: &[LineItem]) -> EngineResult<String> {
    serde_json::to_string(items).map_err(|e| EngineError::EncodeError {
        message: e.to_string(),
    })
}

/// Decodes a stored line-item list.
///
/// # Examples
///
/// ```
/// use setoran_engine::models::LineItemKind;
/// use setoran_engine::store::decode_line_items;
///
/// let items = decode_line_items(
///     LineItemKind::Expense,
///     r#"[{"id":"1","description":"oil","amount":"50000"}]"#,
/// );
/// assert_eq!(items.len(), 1);
///
/// assert!(decode_line_items(LineItemKind::Expense, "").is_empty());
/// assert!(decode_line_items(LineItemKind::Expense, "{not json").is_empty());
/// ```
pub fn decode_line_items(kind: LineItemKind, blob: &str) -> Vec<LineItem> {
    if blob.trim().is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<Vec<LineItem>>(blob) {
        Ok(items) => items,
        Err(err) => {
            warn!(list = %kind, error = %err, "Stored line items could not be decoded, using empty list");
            Vec::new()
        }
    }
}
