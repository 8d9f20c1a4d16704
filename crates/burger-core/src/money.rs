//! # Money Module
//!
//! Provides the `Money` type for ingredient prices and order totals.
//!
//! ## Why a Newtype?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The catalog prices every ingredient in whole currency units:          │
//! │                                                                         │
//! │    { "name": "Fluorescent bun", "price": 988 }                          │
//! │                                                                         │
//! │  Prices only ever get added up and multiplied by a count, so an        │
//! │  integer is exact. Wrapping it keeps prices from mixing with the       │
//! │  other integers flying around (counts, order numbers, calories).       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use burger_core::money::Money;
//!
//! let bun = Money::new(988);
//! let sauce = Money::new(90);
//!
//! let total = bun * 2 + sauce;
//! assert_eq!(total.amount(), 2066);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A price in whole currency units.
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Ingredient.price ──┬──► Constructor total (bun × 2 + fillings)        │
/// │                     │                                                   │
/// │                     └──► OrderSummary total (Σ price × count)           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from an amount in whole units.
    #[inline]
    pub const fn new(amount: i64) -> Self {
        Money(amount)
    }

    /// Returns the amount in whole units.
    #[inline]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies the price by an item count.
    ///
    /// ## Example
    /// ```rust
    /// use burger_core::money::Money;
    ///
    /// let patty = Money::new(424);
    /// assert_eq!(patty.times(3).amount(), 1272);
    /// ```
    #[inline]
    pub const fn times(&self, count: u32) -> Self {
        Money(self.0 * count as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: u32) -> Self {
        self.times(count)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
