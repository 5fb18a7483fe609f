//! Aggregation of expense and income line items.

use rust_decimal::Decimal;

use crate::models::LineItem;

/// Sums the items that count toward a total.
///
/// Only items with a non-blank description and a strictly positive amount
/// are included; see [`LineItem::counts_toward_total`]. List order has no
/// effect on the result.
///
/// # Examples
///
/// ```
/// use setoran_engine::calculation::sum_line_items;
/// use setoran_engine::models::LineItem;
/// use rust_decimal::Decimal;
///
/// let items = vec![
///     LineItem::new("1", "oil", Decimal::new(50000, 0)),
///     LineItem::new("2", "", Decimal::new(30000, 0)),
///     LineItem::new("3", "parking", Decimal::ZERO),
/// ];
/// assert_eq!(sum_line_items(&items), Decimal::new(50000, 0));
/// ```
pub fn sum_line_items(items: &[LineItem]) -> Decimal {
    items
        .iter()
        .filter(|item| item.counts_toward_total())
        .map(|item| item.amount)
        .sum()
}
