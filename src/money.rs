use std::fmt;
use std::iter::Sum;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::EditorError;

/// Fixed-price services: any service whose name matches one of these
/// (case-insensitively) ignores the amount field entirely.
static FIXED_PRICES: Lazy<Vec<(&'static str, Amount)>> = Lazy::new(|| {
    vec![
        ("manutenção", Amount::from_cents(30_000)),
        ("limpeza", Amount::from_cents(15_000)),
    ]
});

/// Looks up the fixed price for a service name, if it has one.
pub fn fixed_price_for(name: &str) -> Option<Amount> {
    let normalized = name.trim().to_lowercase();
    FIXED_PRICES
        .iter()
        .find(|(keyword, _)| *keyword == normalized)
        .map(|(_, price)| *price)
}

/// A monetary value held as whole cents.
///
/// Amounts always render with exactly two fraction digits, so summing
/// stored amounts and formatting the result matches summing the displayed
/// values digit for digit.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Parses operator input into an amount, rounding to whole cents
    /// (half away from zero). Empty or non-numeric input is rejected.
    pub fn parse(input: &str) -> Result<Self, EditorError> {
        let trimmed = input.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| EditorError::InvalidAmount(input.to_string()))?;
        if !value.is_finite() {
            return Err(EditorError::InvalidAmount(input.to_string()));
        }
        Ok(Self((value * 100.0).round() as i64))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        Self(iter.map(|amount| amount.0).sum())
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
