//! Common Types Module
//!
//! Presentation-side money helpers shared by the pricing service and routes.
//! All rounding in the crate goes through [`format_amount`].

use rust_decimal::Decimal;
use serde::Serialize;

use crate::services::emi_calculator::decimal_to_f64;

/// Two-decimal display string (`10987.5` → `"10987.50"`).
///
/// Applied once, to the final figure. Intermediate values stay unrounded.
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    // tiny negative residues (e.g. total - principal at 0%) print as "-0.00"
    if formatted == "-0.00" {
        return "0.00".to_string();
    }
    formatted
}

/// MRP vs selling price difference for a variant
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Savings {
    /// `mrp - price`
    pub amount: String,
    /// `(mrp - price) / mrp * 100`, `0` when mrp is 0
    pub percent: String,
}

impl Savings {
    pub fn from_prices(mrp: Decimal, price: Decimal) -> Self {
        let mrp = decimal_to_f64(mrp);
        let price = decimal_to_f64(price);
        let amount = mrp - price;
        let percent = if mrp == 0.0 { 0.0 } else { amount / mrp * 100.0 };

        Self {
            amount: format_amount(amount),
            percent: format_amount(percent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(11009.760501), "11009.76");
        assert_eq!(format_amount(10000.0), "10000.00");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(-1e-9), "0.00");
    }

    #[test]
    fn test_savings() {
        let savings = Savings::from_prices(Decimal::from(134900), Decimal::from(124900));
        assert_eq!(savings.amount, "10000.00");
        assert_eq!(savings.percent, "7.41");
    }

    #[test]
    fn test_savings_zero_mrp() {
        let savings = Savings::from_prices(Decimal::ZERO, Decimal::ZERO);
        assert_eq!(savings.amount, "0.00");
        assert_eq!(savings.percent, "0.00");
    }
}
