//! # Money Module
//!
//! Provides `Money` (integer minor units) and `Rate` (basis points).
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Invoice form in floating point:                                        │
//! │    3 × 0.10 + 0.20 = 0.5000000000000001                                 │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    3 × 10 + 20 = 50 cents, every time                                   │
//! │                                                                         │
//! │  Percentages are basis points, so tax and discount are integer math    │
//! │  too: (amount × bps + 5000) / 10000                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockdesk_core::money::{Money, Rate};
//!
//! let price = Money::from_cents(1000); // $10.00
//! let line = price.multiply_quantity(2); // $20.00
//! let tax = line.percentage_of(Rate::from_bps(1000)); // 10%
//! assert_eq!(tax.cents(), 200);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};
use ts_rs::TS;

/// Basis points in 100%.
pub const FULL_RATE_BPS: u32 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Where Money Flows
/// ```text
/// CatalogItem.unit_price ──► LineItem.unit_price ──► line extension
///                                                          │
///                                                          ▼
///                        LedgerTotals { subtotal, tax_amount, discount_amount, total }
/// ```
///
/// Signed so that intermediate differences (e.g. a discount larger than the
/// tax) are representable; the ledger clamps inputs to keep totals sane.
///
/// Arithmetic saturates at the `i64` bounds instead of wrapping, so a sum
/// of non-negative amounts never turns negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use stockdesk_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit portion (truncated toward zero).
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns this amount, or zero if it is negative.
    ///
    /// ```rust
    /// use stockdesk_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(-250).clamp_non_negative(), Money::zero());
    /// assert_eq!(Money::from_cents(250).clamp_non_negative().cents(), 250);
    /// ```
    #[inline]
    pub const fn clamp_non_negative(self) -> Self {
        if self.0 < 0 {
            Money(0)
        } else {
            self
        }
    }

    /// Returns `rate` percent of this amount, rounded half up at the cent.
    ///
    /// Used for both tax and percentage discounts.
    ///
    /// ```rust
    /// use stockdesk_core::money::{Money, Rate};
    ///
    /// // $10.00 × 8.25% = $0.825 → $0.83
    /// let tax = Money::from_cents(1000).percentage_of(Rate::from_bps(825));
    /// assert_eq!(tax.cents(), 83);
    /// ```
    pub fn percentage_of(&self, rate: Rate) -> Money {
        // i128 keeps large documents from overflowing mid-calculation
        let scaled = self.0 as i128 * rate.bps() as i128;
        let half = FULL_RATE_BPS as i128 / 2;
        let rounded = if scaled >= 0 {
            (scaled + half) / FULL_RATE_BPS as i128
        } else {
            (scaled - half) / FULL_RATE_BPS as i128
        };
        Money::from_cents(rounded.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }

    /// Multiplies a unit price by a quantity, saturating on overflow.
    ///
    /// ```rust
    /// use stockdesk_core::money::Money;
    ///
    /// let extension = Money::from_cents(299).multiply_quantity(3);
    /// assert_eq!(extension.cents(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }
}

/// Debug-grade display (`$10.99`). The app layer formats with the
/// configured currency symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
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
        Money(self.0.saturating_add(other.0))
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Rate
// =============================================================================

/// A percentage in basis points (1 bps = 0.01%).
///
/// ```text
///   1000 bps = 10%      825 bps = 8.25%      10000 bps = 100%
/// ```
///
/// The same type carries tax rates, document discount rates and per-line
/// percentage discounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rate(u32);

impl Rate {
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Creates a rate from a whole percentage (`10` → 10%).
    #[inline]
    pub const fn from_percent(pct: u32) -> Self {
        Rate(pct * 100)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Rate(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Caps the rate at 100%.
    #[inline]
    pub const fn capped(self) -> Self {
        if self.0 > FULL_RATE_BPS {
            Rate(FULL_RATE_BPS)
        } else {
            self
        }
    }
}

impl Default for Rate {
    fn default() -> Self {
        Rate::zero()
    }
}

/// Shows `8.25%`, `10%`, `7.5%`.
impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac == 0 {
            write!(f, "{}%", whole)
        } else if frac % 10 == 0 {
            write!(f, "{}.{}%", whole, frac / 10)
        } else {
            write!(f, "{}.{:02}%", whole, frac)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents_and_parts() {
        let money = Money::from_cents(1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
        assert_eq!(Money::from_cents(-550).dollars(), -5);
        assert_eq!(Money::from_cents(-550).cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "$10.99");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_percentage_of_rounds_half_up() {
        assert_eq!(Money::from_cents(2500).percentage_of(Rate::from_percent(10)).cents(), 250);
        assert_eq!(Money::from_cents(1000).percentage_of(Rate::from_bps(825)).cents(), 83);
        // $0.05 × 10% = 0.5 cent → 1 cent
        assert_eq!(Money::from_cents(5).percentage_of(Rate::from_percent(10)).cents(), 1);
        // symmetric for negative amounts
        assert_eq!(Money::from_cents(-5).percentage_of(Rate::from_percent(10)).cents(), -1);
    }

    #[test]
    fn test_percentage_of_large_amount_does_not_overflow() {
        let big = Money::from_cents(i64::MAX / 2);
        let all = big.percentage_of(Rate::from_bps(FULL_RATE_BPS));
        assert_eq!(all, big);
    }

    #[test]
    fn test_percentage_of_saturates_at_i64_bounds() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!(max.percentage_of(Rate::from_bps(u32::MAX)), max);
        let min = Money::from_cents(i64::MIN);
        assert_eq!(min.percentage_of(Rate::from_bps(u32::MAX)).cents(), i64::MIN);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 250, 5].into_iter().map(Money::from_cents).sum();
        assert_eq!(total.cents(), 355);
    }

    #[test]
    fn test_arithmetic_saturates_instead_of_wrapping() {
        let near_max = Money::from_cents(i64::MAX - 10);
        assert_eq!((near_max + Money::from_cents(100)).cents(), i64::MAX);
        assert_eq!(near_max.multiply_quantity(3).cents(), i64::MAX);
        assert_eq!((Money::from_cents(i64::MIN) - Money::from_cents(1)).cents(), i64::MIN);

        let total: Money = std::iter::repeat(near_max).take(4).sum();
        assert_eq!(total.cents(), i64::MAX);
    }

    #[test]
    fn test_rate_display_and_cap() {
        assert_eq!(Rate::from_bps(825).to_string(), "8.25%");
        assert_eq!(Rate::from_bps(750).to_string(), "7.5%");
        assert_eq!(Rate::from_percent(10).to_string(), "10%");
        assert_eq!(Rate::from_bps(25_000).capped().bps(), FULL_RATE_BPS);
    }

    /// Splitting $10.00 three ways loses a cent; the ledger never divides,
    /// this documents why.
    #[test]
    fn test_division_precision_loss_documented() {
        let one_third = Money::from_cents(1000 / 3);
        assert_eq!(one_third.multiply_quantity(3).cents(), 999);
    }
}
