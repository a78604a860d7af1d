//! Lossless amount type backed by rust_decimal.
//!
//! Balances and reward amounts arrive as JSON numbers; arithmetic on them must
//! not drift the way f64 accumulation does. Rates (APR/APY percentages) are
//! deliberately NOT this type, they are display-destined f64s.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal as RustDecimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Exact decimal amount. Serializes as a JSON number.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Amount(#[serde(with = "rust_decimal::serde::float")] RustDecimal);

impl Amount {
    pub const ZERO: Amount = Amount(RustDecimal::ZERO);
    pub const HUNDRED: Amount = Amount(RustDecimal::ONE_HUNDRED);

    pub fn new(value: RustDecimal) -> Self {
        Amount(value)
    }

    pub fn from_i64(value: i64) -> Self {
        Amount(RustDecimal::from(value))
    }

    pub fn inner(&self) -> RustDecimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        !self.0.is_zero() && self.0.is_sign_positive()
    }

    pub fn is_negative(&self) -> bool {
        !self.0.is_zero() && self.0.is_sign_negative()
    }

    pub fn abs(&self) -> Self {
        Amount(self.0.abs())
    }

    /// Division that treats a zero divisor as zero instead of panicking.
    /// Share-of-pool math wants 0%, not an error, for an empty pool.
    pub fn checked_ratio(&self, divisor: Amount) -> Amount {
        if divisor.is_zero() {
            Amount::ZERO
        } else {
            Amount(self.0 / divisor.0)
        }
    }

    /// Lossy conversion for rate math and display estimates.
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(0.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RustDecimal::from_str(s).map(Amount)
    }
}

impl From<RustDecimal> for Amount {
    fn from(value: RustDecimal) -> Self {
        Amount(value)
    }
}

impl std::ops::Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Amount) -> Amount {
        Amount(self.0 - rhs.0)
    }
}

impl std::ops::Mul for Amount {
    type Output = Amount;

    fn mul(self, rhs: Amount) -> Amount {
        Amount(self.0 * rhs.0)
    }
}

impl std::ops::Neg for Amount {
    type Output = Amount;

    fn neg(self) -> Amount {
        Amount(-self.0)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, |acc, a| acc + a)
    }
}
