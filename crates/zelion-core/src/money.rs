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
//! │  OUR SOLUTION: Integer minor units                                      │
//! │    Catalog prices are whole numbers of the smallest currency unit      │
//! │    Cart totals are exact sums of price × quantity                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use zelion_core::money::Money;
//!
//! let price = Money::from_minor(15999);
//!
//! let doubled = price * 2;
//! let total = price + Money::from_minor(4999);
//!
//! assert_eq!(doubled.amount(), 31998);
//! assert_eq!(total.amount(), 20998);
//! ```
//!
//! Rendering with a currency symbol is a presentation concern and lives in
//! the storefront's configuration (`format_currency`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for savings deltas
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Transparent serde**: Serializes as a bare number, so JSON stays
///   `{"total": 20998}` for the presentation layer
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► CartItem.line_total ──► CartState.total
///       │
///       └──► Product.savings (original price − price)
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from the smallest currency unit.
    ///
    /// ## Example
    /// ```rust
    /// use zelion_core::money::Money;
    ///
    /// let price = Money::from_minor(2999);
    /// assert_eq!(price.amount(), 2999);
    /// ```
    #[inline]
    pub const fn from_minor(amount: i64) -> Self {
        Money(amount)
    }

    /// Returns the value in the smallest currency unit.
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity, saturating at the `i64` bounds.
    ///
    /// ## Example
    /// ```rust
    /// use zelion_core::money::Money;
    ///
    /// let unit_price = Money::from_minor(2999);
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.amount(), 8997);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Applies a whole-percent discount and returns the discounted amount.
    ///
    /// The discount is rounded half-up to the nearest minor unit, the same
    /// way the catalog's stated discounts are rounded.
    ///
    /// ## Example
    /// ```rust
    /// use zelion_core::money::Money;
    ///
    /// let list = Money::from_minor(19999);
    /// assert_eq!(list.apply_percentage_discount(20).amount(), 15999);
    /// ```
    pub fn apply_percentage_discount(&self, percent: u8) -> Money {
        let discount = (self.0 as i128 * percent as i128 + 50) / 100;
        Money(self.0 - discount as i64)
    }

    /// Expresses `self` as a whole percentage of `base`, rounded half-up.
    ///
    /// Returns `None` when `base` is not positive.
    pub fn percent_of(&self, base: Money) -> Option<u8> {
        if !base.is_positive() {
            return None;
        }
        let pct = (self.0 as i128 * 100 + base.0 as i128 / 2) / base.0 as i128;
        Some(pct.clamp(0, 100) as u8)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain minor-unit rendering, intended for logs.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
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

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Saturating, so a cart total can never wrap.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| Money(acc.0.saturating_add(m.0)))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
