//! Meter-based sale calculation.
//!
//! Converts the pump meter readings of a shift into liters dispensed and
//! the gross sale value of that fuel.

use rust_decimal::Decimal;

/// Price of one liter in currency minor units (Rp 11.500).
///
/// Deployments override this through `pricing.yaml` and
/// [`calculate_with_unit_price`](super::calculate_with_unit_price).
pub const UNIT_PRICE: Decimal = Decimal::from_parts(11500, 0, 0, false, 0);

/// Returns the liters dispensed between two meter readings.
///
/// Never negative: a closing reading below the opening reading yields zero.
///
/// # Examples
///
/// ```
/// use setoran_engine::calculation::total_liters;
/// use rust_decimal::Decimal;
///
/// assert_eq!(total_liters(Decimal::new(1000, 0), Decimal::new(1050, 0)), Decimal::new(50, 0));
/// assert_eq!(total_liters(Decimal::new(1050, 0), Decimal::new(1000, 0)), Decimal::ZERO);
/// ```
pub fn total_liters(meter_start: Decimal, meter_end: Decimal) -> Decimal {
    (meter_end - meter_start).max(Decimal::ZERO)
}

/// Returns the gross sale value of the dispensed liters.
pub fn gross_sale(total_liters: Decimal, unit_price: Decimal) -> Decimal {
    total_liters * unit_price
}
