//! Payment split between QRIS and cash.

use rust_decimal::Decimal;

/// Returns the cash the attendant must hand over.
///
/// QRIS payments are subtracted from the gross sale. An overpayment by
/// QRIS is absorbed: the result is floored at zero and nothing is carried
/// elsewhere.
///
/// # Examples
///
/// ```
/// use setoran_engine::calculation::cash_portion;
/// use rust_decimal::Decimal;
///
/// let gross = Decimal::new(100000, 0);
/// assert_eq!(cash_portion(gross, Decimal::new(40000, 0)), Decimal::new(60000, 0));
/// assert_eq!(cash_portion(gross, Decimal::new(150000, 0)), Decimal::ZERO);
/// ```
pub fn cash_portion(gross_sale: Decimal, qris_amount: Decimal) -> Decimal {
    (gross_sale - qris_amount).max(Decimal::ZERO)
}
