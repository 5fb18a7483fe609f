//! Derived-totals calculation for a shift.
//!
//! This is the single source of truth for every figure stored alongside a
//! shift report. The functions here are pure: no I/O, no shared state, and
//! the same input always yields the same output.

use rust_decimal::Decimal;

use crate::models::{DerivedTotals, ShiftInput};

use super::line_items::sum_line_items;
use super::meter::{UNIT_PRICE, gross_sale, total_liters};
use super::payment::cash_portion;

/// Calculates the derived totals of a shift at the default [`UNIT_PRICE`].
///
/// Steps, in order:
/// 1. liters = max(0, meter_end - meter_start)
/// 2. gross sale = liters × unit price
/// 3. cash = max(0, gross sale - QRIS)
/// 4. expenses = sum of counted expense items
/// 5. income = sum of counted income items
/// 6. net = cash + income - expenses (not clamped)
///
/// The input is assumed to have passed
/// [`validate_input`](crate::validation::validate_input).
///
/// # Examples
///
/// ```
/// use setoran_engine::calculation::calculate;
/// use setoran_engine::models::{LineItem, ShiftInput};
/// use rust_decimal::Decimal;
///
/// let input = ShiftInput {
///     meter_start: Decimal::new(1000, 0),
///     meter_end: Decimal::new(1050, 0),
///     qris_amount: Decimal::new(200000, 0),
///     expense_items: vec![
///         LineItem::new("1", "oil", Decimal::new(50000, 0)),
///         LineItem::new("2", "", Decimal::new(30000, 0)),
///     ],
///     income_items: vec![],
/// };
///
/// let totals = calculate(&input);
/// assert_eq!(totals.total_liters, Decimal::new(50, 0));
/// assert_eq!(totals.gross_sale, Decimal::new(575000, 0));
/// assert_eq!(totals.cash_portion, Decimal::new(375000, 0));
/// assert_eq!(totals.total_expenses, Decimal::new(50000, 0));
/// assert_eq!(totals.net_total, Decimal::new(325000, 0));
/// ```
pub fn calculate(input: &ShiftInput) -> DerivedTotals {
    calculate_with_unit_price(input, UNIT_PRICE)
}

/// Calculates the derived totals of a shift at the given unit price.
pub fn calculate_with_unit_price(input: &ShiftInput, unit_price: Decimal) -> DerivedTotals {
    let total_liters = total_liters(input.meter_start, input.meter_end);
    let gross_sale = gross_sale(total_liters, unit_price);
    let cash_portion = cash_portion(gross_sale, input.qris_amount);
    let total_expenses = sum_line_items(&input.expense_items);
    let total_income = sum_line_items(&input.income_items);
    let net_total = cash_portion + total_income - total_expenses;

    DerivedTotals {
        total_liters,
        gross_sale,
        cash_portion,
        total_expenses,
        total_income,
        net_total,
    }
}

/// Calculates totals for a what-if preview. Nothing is stored.
///
/// Identical to [`calculate`]; kept as a separate entry point so preview
/// callers never depend on anything persistence-related.
pub fn preview(input: &ShiftInput) -> DerivedTotals {
    calculate(input)
}

/// Preview at the given unit price.
pub fn preview_with_unit_price(input: &ShiftInput, unit_price: Decimal) -> DerivedTotals {
    calculate_with_unit_price(input, unit_price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LineItem;
    use proptest::prelude::*;

    fn dec(n: i64) -> Decimal {
        Decimal::new(n, 0)
    }

    fn item(id: &str, description: &str, amount: i64) -> LineItem {
        LineItem::new(id, description, dec(amount))
    }

    #[test]
    fn test_reference_scenario() {
        let input = ShiftInput {
            meter_start: dec(1000),
            meter_end: dec(1050),
            qris_amount: dec(200000),
            expense_items: vec![item("e1", "oil", 50000), item("e2", "", 30000)],
            income_items: vec![],
        };

        let totals = calculate(&input);

        assert_eq!(totals.total_liters, dec(50));
        assert_eq!(totals.gross_sale, dec(575000));
        assert_eq!(totals.cash_portion, dec(375000));
        assert_eq!(totals.total_expenses, dec(50000));
        assert_eq!(totals.total_income, dec(0));
        assert_eq!(totals.net_total, dec(325000));
    }

    #[test]
    fn test_qris_exceeding_gross_sale_floors_cash() {
        // 100000 / 11500 liters is not exact, so drive gross sale through the price
        let input = ShiftInput {
            qris_amount: dec(150000),
            ..ShiftInput::new(dec(0), dec(10))
        };

        let totals = calculate_with_unit_price(&input, dec(10000));
        assert_eq!(totals.gross_sale, dec(100000));
        assert_eq!(totals.cash_portion, Decimal::ZERO);
        assert_eq!(totals.net_total, Decimal::ZERO);
    }

    #[test]
    fn test_net_total_may_be_negative() {
        let input = ShiftInput {
            qris_amount: dec(0),
            expense_items: vec![item("e1", "generator repair", 200000)],
            income_items: vec![item("i1", "car wash", 10000)],
            ..ShiftInput::new(dec(0), dec(10))
        };

        let totals = calculate(&input);
        assert_eq!(totals.cash_portion, dec(115000));
        assert_eq!(totals.net_total, dec(-75000));
    }

    #[test]
    fn test_income_is_added() {
        let input = ShiftInput {
            income_items: vec![item("i1", "car wash", 10000), item("i2", "", 99999)],
            ..ShiftInput::new(dec(0), dec(1))
        };

        let totals = calculate(&input);
        assert_eq!(totals.total_income, dec(10000));
        assert_eq!(totals.net_total, dec(21500));
    }

    #[test]
    fn test_reversed_meters_produce_zero_liters() {
        let totals = calculate(&ShiftInput::new(dec(1050), dec(1000)));
        assert_eq!(totals.total_liters, Decimal::ZERO);
        assert_eq!(totals.gross_sale, Decimal::ZERO);
    }

    #[test]
    fn test_preview_matches_calculate() {
        let input = ShiftInput {
            qris_amount: dec(5000),
            expense_items: vec![item("e1", "oil", 2000)],
            ..ShiftInput::new(dec(10), dec(20))
        };
        assert_eq!(preview(&input), calculate(&input));
        assert_eq!(
            preview_with_unit_price(&input, dec(12000)),
            calculate_with_unit_price(&input, dec(12000))
        );
    }

    fn amount() -> impl Strategy<Value = Decimal> {
        (0i64..100_000_000, 0u32..3).prop_map(|(n, scale)| Decimal::new(n, scale))
    }

    fn line_item() -> impl Strategy<Value = LineItem> {
        (
            "[a-z]{1,8}",
            prop_oneof![Just(String::new()), Just("  ".to_string()), "[a-z ]{1,12}"],
            prop_oneof![Just(Decimal::ZERO), amount()],
        )
            .prop_map(|(id, description, amount)| LineItem::new(id, description, amount))
    }

    fn shift_input() -> impl Strategy<Value = ShiftInput> {
        (
            amount(),
            amount(),
            amount(),
            prop::collection::vec(line_item(), 0..8),
            prop::collection::vec(line_item(), 0..8),
        )
            .prop_map(|(meter_start, meter_end, qris_amount, expense_items, income_items)| {
                ShiftInput {
                    meter_start,
                    meter_end,
                    qris_amount,
                    expense_items,
                    income_items,
                }
            })
    }

    proptest! {
        /// Property: liters equal the meter difference when the range is valid,
        /// and are never negative.
        #[test]
        fn prop_liters_never_negative(input in shift_input()) {
            let totals = calculate(&input);
            prop_assert!(totals.total_liters >= Decimal::ZERO);
            if input.meter_end >= input.meter_start {
                prop_assert_eq!(totals.total_liters, input.meter_end - input.meter_start);
            }
        }

        /// Property: gross sale is exactly liters times the unit price.
        #[test]
        fn prop_gross_sale_exact(input in shift_input()) {
            let totals = calculate(&input);
            prop_assert_eq!(totals.gross_sale, totals.total_liters * UNIT_PRICE);
        }

        /// Property: cash is never negative and equals gross minus QRIS when QRIS fits.
        #[test]
        fn prop_cash_floor(input in shift_input()) {
            let totals = calculate(&input);
            prop_assert!(totals.cash_portion >= Decimal::ZERO);
            if input.qris_amount <= totals.gross_sale {
                prop_assert_eq!(totals.cash_portion, totals.gross_sale - input.qris_amount);
            }
        }

        /// Property: net total is cash plus income minus expenses.
        #[test]
        fn prop_net_total_identity(input in shift_input()) {
            let totals = calculate(&input);
            prop_assert_eq!(
                totals.net_total,
                totals.cash_portion + totals.total_income - totals.total_expenses
            );
        }

        /// Property: aggregation ignores list order.
        #[test]
        fn prop_aggregation_order_invariant(input in shift_input()) {
            let mut reversed = input.clone();
            reversed.expense_items.reverse();
            reversed.income_items.reverse();
            prop_assert_eq!(calculate(&input), calculate(&reversed));
        }

        /// Property: only positive, described items are summed.
        #[test]
        fn prop_aggregation_filter(input in shift_input()) {
            let expected: Decimal = input
                .expense_items
                .iter()
                .filter(|i| !i.description.trim().is_empty() && i.amount > Decimal::ZERO)
                .map(|i| i.amount)
                .sum();
            prop_assert_eq!(calculate(&input).total_expenses, expected);
        }

        /// Property: calculating twice yields identical output.
        #[test]
        fn prop_calculate_idempotent(input in shift_input()) {
            let first = calculate(&input);
            let second = calculate(&input);
            prop_assert_eq!(first.clone(), second.clone());
            prop_assert_eq!(first.net_total.serialize(), second.net_total.serialize());
        }
    }
}
