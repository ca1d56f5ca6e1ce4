//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Integer cents are exact but cannot hold intermediate tax amounts:      │
//! │    $25.00 × 7.5% = $1.875  → not representable in whole cents           │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal                                             │
//! │    Totals are stored at full precision ($24.875 stays $24.875) and     │
//! │    are rounded to 2 decimal places ONLY when handed to the display     │
//! │    layer. Recomputing never compounds rounding error.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rust_decimal::Decimal;
//! use stockbook_core::money::Money;
//!
//! let price = Money::new(Decimal::new(1099, 2)); // $10.99
//!
//! let line = price.times_quantity(3);            // $32.97
//! let total = line + Money::new(Decimal::new(500, 2));
//! assert_eq!(total.amount(), Decimal::new(3797, 2));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents an exact monetary value.
///
/// ## Design Decisions
/// - **Decimal (signed)**: Allows negative intermediates for refunds, discounts
/// - **Single field tuple struct**: Zero-cost abstraction over `Decimal`
/// - **Full precision storage**: rounding happens only in [`Money::rounded_display`]
///
/// ## Where Money Flows
/// ```text
/// Item.price ──► SaleLineItem.price_at_sale ──► line_total()
///                                                    │
///        Sale.subtotal ◄── Σ line totals ◄───────────┘
///             │
///             ▼
///        tax / discount ──► Sale.total ──► display formatting (UI)
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS, Default,
)]
#[ts(export)]
pub struct Money(#[ts(as = "String")] Decimal);

impl Money {
    /// Creates a Money value from an exact decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Returns the exact underlying amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Calculates tax from a percentage rate, exactly.
    ///
    /// No rounding is applied: $25.00 at 7.5% yields $1.875 and the caller
    /// keeps all three decimals until display time.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use stockbook_core::money::Money;
    /// use stockbook_core::types::TaxRate;
    ///
    /// let subtotal = Money::new(Decimal::new(2500, 2)); // $25.00
    /// let tax = subtotal.tax(TaxRate::from_percent(Decimal::new(75, 1)));
    /// assert_eq!(tax.amount(), Decimal::new(1875, 3)); // $1.875
    /// ```
    pub fn tax(&self, rate: TaxRate) -> Money {
        Money(self.0 * rate.percent() / Decimal::ONE_HUNDRED)
    }

    /// Multiplies money by a unit count.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use stockbook_core::money::Money;
    ///
    /// let unit_price = Money::new(Decimal::new(299, 2)); // $2.99
    /// let line_total = unit_price.times_quantity(3);
    /// assert_eq!(line_total.amount(), Decimal::new(897, 2)); // $8.97
    /// ```
    #[inline]
    pub fn times_quantity(&self, qty: i64) -> Self {
        Money(self.0 * Decimal::from(qty))
    }

    /// Multiplies money by a weight.
    ///
    /// The weight's unit is carried for display elsewhere; no unit
    /// conversion happens here. The unit cost is assumed to be expressed
    /// in terms of the stored weight unit.
    #[inline]
    pub fn times_weight(&self, weight: Decimal) -> Self {
        Money(self.0 * weight)
    }

    /// Floors the value at zero.
    ///
    /// Business rule: a sale can never show a negative payable amount,
    /// even when the discount exceeds subtotal + tax.
    #[inline]
    pub fn clamp_non_negative(&self) -> Self {
        if self.0 < Decimal::ZERO {
            Money::zero()
        } else {
            *self
        }
    }

    /// Rounds to currency precision (2 decimal places) for display.
    ///
    /// Uses banker's rounding (round half to even), which avoids systematic
    /// bias across many transactions. This is the ONLY place rounding is
    /// allowed; stored amounts always keep full precision.
    #[inline]
    pub fn rounded_display(&self) -> Decimal {
        self.0.round_dp(2)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging. Use frontend formatting for actual UI display
/// to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}${:.2}", sign, self.rounded_display().abs())
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

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Sum over an iterator of Money values (for subtotals).
impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
