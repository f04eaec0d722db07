//! # Money Module
//!
//! Provides the `Money` type for *displaying* monetary values.
//!
//! ## Why Two Representations?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ENGINE MATH (f64)                  DISPLAY (Money, integer cents)      │
//! │                                                                         │
//! │  min_tip(49.50) = 0.495             Money::from_amount(0.495) = $0.50   │
//! │  split_total = 59.00 / 3            Money::from_amount(19.666…) = $19.67│
//! │           = 19.666…                                                     │
//! │                                                                         │
//! │  The engine works on real numbers: the tip floor may be a fraction of  │
//! │  a cent and per-person shares are never rounded. Cents appear only at  │
//! │  the very end, when a number is turned into text.                      │
//! │                                                                         │
//! │  RULE: never feed a Money value back into the engine.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tip_core::money::Money;
//!
//! let share = Money::from_amount(59.0 / 3.0);
//! assert_eq!(share.cents(), 1967);
//! assert_eq!(share.to_string(), "$19.67");
//! assert_eq!(share.format_with_symbol("€"), "€19.67");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;

// =============================================================================
// Money Type
// =============================================================================

/// An amount in cents, ready to be printed.
///
/// Signed so that a negative amount still prints (`-$5.50`) instead of
/// wrapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts an engine amount to cents, rounding halves away from zero.
    ///
    /// Non-finite amounts display as zero.
    ///
    /// ## Example
    /// ```rust
    /// use tip_core::money::Money;
    ///
    /// assert_eq!(Money::from_amount(10.005).cents(), 1001);
    /// assert_eq!(Money::from_amount(0.06).cents(), 6);
    /// assert_eq!(Money::from_amount(f64::NAN).cents(), 0);
    /// ```
    pub fn from_amount(amount: f64) -> Self {
        if !amount.is_finite() {
            return Money::default();
        }

        // Scale first, then nudge by a tiny epsilon so 10.005 (stored as
        // 10.00499…) lands on the cent a person expects.
        let scaled = amount * 100.0;
        let nudged = scaled + scaled.signum() * 1e-7;
        Money(nudged.round() as i64)
    }

    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Renders `-`, the symbol, whole units, then exactly two cent digits.
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        format!("{}{}{}.{:02}", sign, symbol, magnitude / 100, magnitude % 100)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

/// Adds displayed per-person shares back together.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        Money(iter.map(|m| m.0).sum())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
