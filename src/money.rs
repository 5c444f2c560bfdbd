//! Money formatting

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, iso};

/// Currency the parlour prices its menu in.
pub const SHOP_CURRENCY: &iso::Currency = iso::INR;

/// Format an amount with exactly two decimal places and no currency symbol.
///
/// Server amounts are rounded in decimal, midpoints away from zero.
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);

    rounded.to_string()
}

/// Format a unit price in the shop currency, e.g. `₹2.50`.
pub fn format_price(amount: Decimal) -> String {
    format!("{}", Money::from_decimal(amount, SHOP_CURRENCY))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use testresult::TestResult;

    use super::*;

    #[test]
    fn format_amount_pads_whole_numbers() {
        assert_eq!(format_amount(Decimal::from(5)), "5.00");
        assert_eq!(format_amount(Decimal::ZERO), "0.00");
    }

    #[test]
    fn format_amount_rounds_midpoints_away_from_zero() -> TestResult {
        assert_eq!(format_amount(Decimal::from_str("2.345")?), "2.35");
        assert_eq!(format_amount(Decimal::from_str("2.344")?), "2.34");
        assert_eq!(format_amount(Decimal::from_str("-1.005")?), "-1.01");

        Ok(())
    }

    #[test]
    fn server_amounts_round_as_decimals_not_binary_floats() -> TestResult {
        let amount: Decimal = serde_json::from_str("1.005")?;

        assert_eq!(format_amount(amount), "1.01");

        Ok(())
    }

    #[test]
    fn format_price_uses_rupee_symbol() -> TestResult {
        let formatted = format_price(Decimal::from_str("2.5")?);

        assert!(formatted.starts_with('₹'), "unexpected price: {formatted}");
        assert!(formatted.ends_with("2.50"), "unexpected price: {formatted}");

        Ok(())
    }
}
