//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
///
/// Displays as the amount with two decimal places followed by the currency
/// code, e.g. `50.00 USD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price from an amount in the smallest currency unit.
    ///
    /// ```rust
    /// # use online_store_core::{CurrencyCode, Price};
    /// let price = Price::from_cents(5000, CurrencyCode::USD);
    /// assert_eq!(price.to_string(), "50.00 USD");
    /// ```
    #[must_use]
    pub fn from_cents(cents: i64, currency_code: CurrencyCode) -> Self {
        Self {
            amount: Decimal::new(cents, 2),
            currency_code,
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.amount, self.currency_code.code())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// The three-letter ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_two_decimals() {
        let price = Price::new(Decimal::new(50, 0), CurrencyCode::USD);
        assert_eq!(price.to_string(), "50.00 USD");
    }

    #[test]
    fn test_from_cents() {
        let price = Price::from_cents(7050, CurrencyCode::EUR);
        assert_eq!(price.amount, Decimal::new(7050, 2));
        assert_eq!(price.to_string(), "70.50 EUR");
    }

    #[test]
    fn test_serde_amount_as_string() {
        let price = Price::from_cents(10000, CurrencyCode::GBP);
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, r#"{"amount":"100.00","currency_code":"GBP"}"#);
    }
}
