//! Money types with precise decimal arithmetic
//!
//! Claim estimates are products of several decimal factors, so amounts are
//! carried as `rust_decimal::Decimal` rather than floats. A claim valued at
//! `11000 * 0.015 * 1.104` is exactly `182.16`, not `182.15999999999997`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Currency codes following ISO 4217
///
/// Every pricing table is in US dollars, so that is the only currency the
/// system carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    USD,
}

impl Currency {
    /// Returns the number of decimal places used when presenting amounts
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary amount with associated currency
///
/// Amounts are stored with 4 decimal places so that intermediate valuation
/// steps keep sub-cent precision; presentation rounds to the currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount: amount.round_dp(4),
            currency,
        }
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: dec!(0),
            currency,
        }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Multiplies by a scalar factor (depreciation, multipliers, percentages)
    pub fn multiply(&self, factor: Decimal) -> Self {
        Self::new(self.amount * factor, self.currency)
    }

    /// Sums amounts, starting from zero
    pub fn total<'a, I>(currency: Currency, amounts: I) -> Money
    where
        I: IntoIterator<Item = &'a Money>,
    {
        amounts
            .into_iter()
            .fold(Money::zero(currency), |acc, m| acc + *m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dp = self.currency.decimal_places();
        write!(
            f,
            "{}{:.dp$}",
            self.currency.symbol(),
            self.amount.round_dp(dp),
            dp = dp as usize
        )
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.amount + other.amount, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let m = Money::new(dec!(182.16), Currency::USD);
        assert_eq!(m.amount(), dec!(182.16));
        assert_eq!(m.currency(), Currency::USD);
    }

    #[test]
    fn test_multiply_is_exact() {
        let m = Money::new(dec!(11000), Currency::USD);
        let estimate = m.multiply(dec!(0.015)).multiply(dec!(1.104));
        assert_eq!(estimate.amount(), dec!(182.16));
    }

    #[test]
    fn test_add_keeps_sub_cent_precision() {
        let sum = Money::new(dec!(182.16), Currency::USD) + Money::new(dec!(916.4232), Currency::USD);
        assert_eq!(sum.amount(), dec!(1098.5832));
    }

    #[test]
    fn test_display_rounds_to_cents() {
        let m = Money::new(dec!(916.4232), Currency::USD);
        assert_eq!(m.to_string(), "$916.42");
    }
}
