//! Monetary amounts as exported by the broker and expected by the ledger.
//!
//! Both sides use a comma as decimal separator. Values are kept as
//! `rust_decimal::Decimal` so sums over merged rows stay exact.

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg};
use std::str::FromStr;

/// A signed monetary amount.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use nordnet_statement::Amount;
///
/// let amount = Amount::from_str("-500,50").unwrap();
/// assert_eq!(amount.outflow().to_string(), "500,5");
/// assert_eq!(amount.inflow().to_string(), "0,0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// Zero value.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Amount(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// The amount if it is positive, otherwise zero.
    pub fn inflow(self) -> Self {
        if self.0 > Decimal::ZERO {
            self
        } else {
            Self::ZERO
        }
    }

    /// The magnitude of the amount if it is negative, otherwise zero.
    pub fn outflow(self) -> Self {
        if self.0 < Decimal::ZERO {
            -self
        } else {
            Self::ZERO
        }
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    /// Accepts `1 234,56`, `1234.56` and `-10` style input. Spaces, including
    /// the no-break variants, are treated as digit grouping.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let cleaned: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '\u{a0}' | '\u{202f}'))
            .map(|c| if c == ',' { '.' } else { c })
            .collect();
        Decimal::from_str(&cleaned).map(Amount)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let normalized = self.0.normalize();
        if normalized.scale() == 0 {
            write!(f, "{},0", normalized)
        } else {
            write!(f, "{}", normalized.to_string().replace('.', ","))
        }
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Amount(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Amount(-self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
