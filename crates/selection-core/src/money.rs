//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Rubles                                           │
//! │    Every price in the boutique is a whole number of rubles              │
//! │    (12500 ₽, 500 ₽, ...). The smallest currency unit IS the display     │
//! │    unit, so there is no minor-unit split at all.                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use selection_core::money::Money;
//!
//! // Create from whole rubles (the only constructor)
//! let bottle = Money::from_rubles(12500);
//! let sample = Money::from_rubles(500);
//!
//! // Arithmetic operations
//! let total = bottle + sample;
//! assert_eq!(total.rubles(), 13000);
//!
//! // NEVER do this:
//! // let bad = Money::from_float(12500.0); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use ts_rs::TS;

use crate::CURRENCY_SYMBOL;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in whole rubles.
///
/// ## Design Decisions
/// - **i64 (signed)**: Sums of catalog prices stay far below the limit, and a
///   signed type keeps subtraction well-defined if it is ever needed
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// Perfume.price / Perfume.sample_price
///        │
///        ▼
/// CartEntry.unit_price() ──► Cart.total() ──► displayed as "13000 ₽"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole rubles.
    ///
    /// ## Example
    /// ```rust
    /// use selection_core::money::Money;
    ///
    /// let price = Money::from_rubles(12500);
    /// assert_eq!(price.rubles(), 12500);
    /// ```
    #[inline]
    pub const fn from_rubles(rubles: i64) -> Self {
        Money(rubles)
    }

    /// Returns the value in whole rubles.
    #[inline]
    pub const fn rubles(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    ///
    /// ## Example
    /// ```rust
    /// use selection_core::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert_eq!(zero.rubles(), 0);
    /// assert!(zero.is_zero());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and debugging. The frontend formats amounts itself so
/// localization stays a rendering concern.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, CURRENCY_SYMBOL)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Summation over an iterator of Money (used by the cart total).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rubles() {
        let money = Money::from_rubles(12500);
        assert_eq!(money.rubles(), 12500);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_rubles(12500)), "12500 ₽");
        assert_eq!(format!("{}", Money::from_rubles(0)), "0 ₽");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_rubles(12500);
        let b = Money::from_rubles(500);

        assert_eq!((a + b).rubles(), 13000);

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.rubles(), 13000);
    }

    #[test]
    fn test_sum() {
        let prices = [500, 15000, 450].map(Money::from_rubles);
        let total: Money = prices.into_iter().sum();
        assert_eq!(total.rubles(), 15950);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());

        let positive = Money::from_rubles(100);
        assert!(!positive.is_zero());
        assert!(positive.is_positive());
    }

    #[test]
    fn test_serializes_as_plain_number() {
        // The frontend receives prices as plain JSON numbers
        let json = serde_json::to_string(&Money::from_rubles(12500)).unwrap();
        assert_eq!(json, "12500");
    }
}
