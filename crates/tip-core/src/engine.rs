//! # Tip Engine
//!
//! The tip/total computation rules. Every function here is pure: no state,
//! no I/O, no errors.
//!
//! ## The Circular Dependency
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  NAIVE APPROACH (broken once rounding exists)                           │
//! │                                                                         │
//! │    tip   = bill × pct%                                                  │
//! │    total = bill + tip                                                   │
//! │    round(total) changes the tip ... which changes the total ...         │
//! │                                                                         │
//! │  OUR SOLUTION: total is the only independently computed number          │
//! │                                                                         │
//! │    unrounded_total = bill + max(0.01, bill × pct / 100)                 │
//! │           │                                                             │
//! │           ├── no rounding ──────────────► total = unrounded_total       │
//! │           │                                                             │
//! │           └── rounding: r = round(unrounded_total)                      │
//! │                  ├── r - bill <  min_tip ► total = bill + min_tip       │
//! │                  └── otherwise ──────────► total = r                    │
//! │                                                                         │
//! │    tip = total - bill              (always derived)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding Convention
//! Whole-unit rounding is round-half-away-from-zero (`f64::round`):
//! `$12.50 → $13.00`.
//!
//! ## Sanitizing
//! [`compute_totals`] is the entry point for callers and cleans its inputs
//! first: a negative or non-finite bill becomes `0`, a non-finite percentage
//! becomes `0`, and a split count of `0` becomes `1`. The individual rule
//! functions below assume clean inputs.

use crate::types::{SplitSelection, TipBreakdown};
use crate::{DEFAULT_SPLIT_COUNT, MIN_TIP_AMOUNT, MIN_TIP_RATE};

// =============================================================================
// Entry Points
// =============================================================================

/// Computes every derived figure for one bill.
///
/// ## Example
/// ```rust
/// use tip_core::engine::compute_totals;
///
/// // $49.50 at 20%, rounded: 59.40 → 59.00, tip 9.50
/// let b = compute_totals(49.50, 20.0, true, 1);
/// assert!((b.unrounded_total - 59.40).abs() < 1e-9);
/// assert!((b.total - 59.00).abs() < 1e-9);
/// assert!((b.tip - 9.50).abs() < 1e-9);
/// ```
pub fn compute_totals(
    bill_amount: f64,
    tip_percentage: f64,
    round_to_nearest: bool,
    split_count: u32,
) -> TipBreakdown {
    let bill = sanitize_bill(bill_amount);
    let pct = sanitize_percentage(tip_percentage);
    let people = split_count.max(DEFAULT_SPLIT_COUNT);

    let total = total(bill, pct, round_to_nearest);
    let tip = tip(bill, total);

    TipBreakdown {
        unrounded_total: unrounded_total(bill, pct),
        total,
        tip,
        effective_tip_percentage: effective_tip_percentage(bill, total),
        split_count: people,
        split_total: split_total(total, people),
        split_tip: split_tip(tip, people),
    }
}

/// Resolves the picker tag and "Other" text into a party size (>= 1).
///
/// ## Example
/// ```rust
/// use tip_core::engine::resolve_split_count;
///
/// assert_eq!(resolve_split_count("Other", "abc"), 1);
/// assert_eq!(resolve_split_count("Other", "4"), 4);
/// assert_eq!(resolve_split_count("3", ""), 3);
/// ```
pub fn resolve_split_count(selection: &str, other_value: &str) -> u32 {
    SplitSelection::from_picker(selection, other_value).count()
}

// =============================================================================
// Rules
// =============================================================================

/// The smallest tip allowed: 1% of the bill or one cent, whichever is larger.
pub fn min_tip(bill_amount: f64) -> f64 {
    f64::max(MIN_TIP_AMOUNT, bill_amount * MIN_TIP_RATE)
}

/// Bill plus tip at the requested percentage, before rounding.
///
/// The tip part is floored at one cent so a tiny percentage on a tiny bill
/// still tips something. A zero bill has a zero total.
pub fn unrounded_total(bill_amount: f64, tip_percentage: f64) -> f64 {
    if bill_amount == 0.0 {
        return 0.0;
    }

    bill_amount + f64::max(MIN_TIP_AMOUNT, bill_amount * tip_percentage / 100.0)
}

/// The grand total. This is the source of truth the tip is derived from.
///
/// With rounding on, the total goes to the nearest whole unit unless that
/// would leave less than [`min_tip`] on top of the bill, in which case the
/// total is `bill + min_tip`.
pub fn total(bill_amount: f64, tip_percentage: f64, round_to_nearest: bool) -> f64 {
    if bill_amount == 0.0 {
        return 0.0;
    }

    let unrounded = unrounded_total(bill_amount, tip_percentage);
    if !round_to_nearest {
        return unrounded;
    }

    let rounded = round_to_whole_unit(unrounded);
    let floor = min_tip(bill_amount);
    if rounded - bill_amount < floor {
        return bill_amount + floor;
    }

    rounded
}

/// The tip actually charged.
#[inline]
pub fn tip(bill_amount: f64, total: f64) -> f64 {
    total - bill_amount
}

/// Percentage the charged tip represents, which can differ from the selected
/// percentage once rounding or the tip floor kicks in.
pub fn effective_tip_percentage(bill_amount: f64, total: f64) -> f64 {
    if bill_amount <= 0.0 {
        return 0.0;
    }

    (total - bill_amount) / bill_amount * 100.0
}

/// Each person's share of the total. Not rounded.
#[inline]
pub fn split_total(total: f64, split_count: u32) -> f64 {
    total / f64::from(split_count)
}

/// Each person's share of the tip. Not rounded.
#[inline]
pub fn split_tip(tip: f64, split_count: u32) -> f64 {
    tip / f64::from(split_count)
}

/// Rounds to the nearest whole currency unit, halves away from zero.
#[inline]
pub fn round_to_whole_unit(amount: f64) -> f64 {
    amount.round()
}

// =============================================================================
// Sanitizing
// =============================================================================

fn sanitize_bill(bill_amount: f64) -> f64 {
    if bill_amount.is_finite() && bill_amount > 0.0 {
        bill_amount
    } else {
        0.0
    }
}

fn sanitize_percentage(tip_percentage: f64) -> f64 {
    if tip_percentage.is_finite() {
        tip_percentage
    } else {
        0.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_min_tip() {
        assert_close(min_tip(0.05), 0.01);
        assert_close(min_tip(0.99), 0.01);
        assert_close(min_tip(49.50), 0.495);
        assert_close(min_tip(200.0), 2.0);
    }

    #[test]
    fn test_unrounded_total() {
        assert_close(unrounded_total(0.0, 20.0), 0.0);
        assert_close(unrounded_total(50.0, 20.0), 60.0);
        assert_close(unrounded_total(49.50, 20.0), 59.40);
        // Tip part floored at one cent
        assert_close(unrounded_total(0.05, 1.0), 0.06);
        assert_close(unrounded_total(10.0, 0.0), 10.01);
        assert_close(unrounded_total(10.0, -15.0), 10.01);
    }

    #[test]
    fn test_total_without_rounding() {
        assert_close(total(50.0, 20.0, false), 60.0);
        assert_close(total(33.33, 15.0, false), 33.33 + 33.33 * 0.15);
    }

    #[test]
    fn test_total_with_rounding() {
        // 59.40 → 59.00, tip 9.50 is above the 0.495 floor
        assert_close(total(49.50, 20.0, true), 59.0);
        // 60.60 → 61.00
        assert_close(total(50.50, 20.0, true), 61.0);
    }

    #[test]
    fn test_rounding_is_half_away_from_zero() {
        // 10.00 + 2.50 = 12.50 exactly → 13.00 (half-to-even would give 12)
        assert_close(total(10.0, 25.0, true), 13.0);
        assert_close(round_to_whole_unit(0.5), 1.0);
        assert_close(round_to_whole_unit(2.5), 3.0);
    }

    #[test]
    fn test_rounding_never_drops_below_min_tip() {
        // 0.06 rounds to 0.00, which is below the bill; floor applies
        assert_close(total(0.05, 1.0, true), 0.06);
        assert_close(tip(0.05, total(0.05, 1.0, true)), 0.01);

        // 10.00 at 1% → 10.10 → 10.00, tip would be 0; floor is 0.10
        assert_close(total(10.0, 1.0, true), 10.10);
    }

    #[test]
    fn test_zero_bill_is_zero_everything() {
        for round in [false, true] {
            let b = compute_totals(0.0, 20.0, round, 3);
            assert_eq!(b.total, 0.0);
            assert_eq!(b.tip, 0.0);
            assert_eq!(b.unrounded_total, 0.0);
            assert_eq!(b.effective_tip_percentage, 0.0);
            assert_eq!(b.split_total, 0.0);
            assert_eq!(b.split_tip, 0.0);
        }
    }

    #[test]
    fn test_effective_tip_percentage() {
        assert_close(effective_tip_percentage(0.0, 0.0), 0.0);
        assert_close(effective_tip_percentage(-5.0, 10.0), 0.0);
        assert_close(effective_tip_percentage(50.0, 60.0), 20.0);
        assert_close(effective_tip_percentage(49.50, 59.0), 9.5 / 49.5 * 100.0);
    }

    #[test]
    fn test_example_even_split() {
        let b = compute_totals(50.0, 20.0, false, 2);
        assert_close(b.tip, 10.0);
        assert_close(b.total, 60.0);
        assert_close(b.split_total, 30.0);
        assert_close(b.split_tip, 5.0);
        assert_close(b.effective_tip_percentage, 20.0);
        assert_eq!(b.split_count, 2);
    }

    #[test]
    fn test_example_rounded_down() {
        let b = compute_totals(49.50, 20.0, true, 1);
        assert_close(b.unrounded_total, 59.40);
        assert_close(b.total, 59.0);
        assert_close(b.tip, 9.50);
    }

    #[test]
    fn test_example_tiny_bill_floor() {
        let b = compute_totals(0.05, 1.0, true, 1);
        assert_close(b.unrounded_total, 0.06);
        assert_close(b.total, 0.06);
        assert_close(b.tip, 0.01);
        assert_close(b.effective_tip_percentage, 20.0);
    }

    #[test]
    fn test_split_shares_are_not_rounded() {
        let b = compute_totals(100.0, 20.0, true, 7);
        assert_close(b.total, 120.0);
        assert_close(b.split_total, 120.0 / 7.0);
        assert_close(b.split_tip, 20.0 / 7.0);
    }

    #[test]
    fn test_sanitizing() {
        let b = compute_totals(f64::NAN, 20.0, true, 2);
        assert_eq!(b.total, 0.0);

        let b = compute_totals(-25.0, 20.0, false, 1);
        assert_eq!(b.total, 0.0);
        assert_eq!(b.tip, 0.0);

        let b = compute_totals(f64::INFINITY, 20.0, false, 1);
        assert_eq!(b.total, 0.0);

        // Non-finite percentage is treated as 0%, so the one-cent floor applies
        let b = compute_totals(10.0, f64::NAN, false, 1);
        assert_close(b.tip, 0.01);

        let b = compute_totals(50.0, 20.0, false, 0);
        assert_eq!(b.split_count, 1);
        assert_close(b.split_total, 60.0);
    }

    #[test]
    fn test_resolve_split_count() {
        assert_eq!(resolve_split_count("Other", "abc"), 1);
        assert_eq!(resolve_split_count("Other", "4"), 4);
        assert_eq!(resolve_split_count("3", ""), 3);
        assert_eq!(resolve_split_count("Other", ""), 1);
        assert_eq!(resolve_split_count("Other", "0"), 1);
        assert_eq!(resolve_split_count("Other", "-2"), 1);
        assert_eq!(resolve_split_count("Other", " 12 "), 1);
        assert_eq!(resolve_split_count("x", "5"), 1);
    }

    // Property-based tests using proptest
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_zero_bill_is_free(
                pct in -100.0f64..500.0,
                round in any::<bool>(),
                people in 0u32..50,
            ) {
                let b = compute_totals(0.0, pct, round, people);
                prop_assert_eq!(b.total, 0.0);
                prop_assert_eq!(b.tip, 0.0);
            }

            #[test]
            fn prop_unrounded_matches_formula(
                bill in 0.01f64..10_000.0,
                pct in 0.0f64..100.0,
            ) {
                let b = compute_totals(bill, pct, false, 1);
                let expected_tip = f64::max(0.01, bill * pct / 100.0);
                prop_assert!((b.tip - expected_tip).abs() < 1e-6);
                prop_assert!((b.total - (bill + b.tip)).abs() < 1e-6);
            }

            #[test]
            fn prop_rounding_respects_tip_floor(
                bill in 0.01f64..10_000.0,
                pct in -50.0f64..100.0,
            ) {
                let b = compute_totals(bill, pct, true, 1);
                prop_assert!(b.total - bill >= min_tip(bill) - 1e-9);
            }

            #[test]
            fn prop_tip_is_total_minus_bill(
                bill in 0.0f64..10_000.0,
                pct in 0.0f64..100.0,
                round in any::<bool>(),
            ) {
                let b = compute_totals(bill, pct, round, 1);
                prop_assert_eq!(b.tip, b.total - bill);
            }

            #[test]
            fn prop_split_shares_recombine(
                bill in 0.0f64..10_000.0,
                pct in 0.0f64..100.0,
                round in any::<bool>(),
                people in 1u32..100,
            ) {
                let b = compute_totals(bill, pct, round, people);
                let n = f64::from(people);
                prop_assert!((b.split_total * n - b.total).abs() < 1e-6);
                prop_assert!((b.split_tip * n - b.tip).abs() < 1e-6);
            }
        }
    }
}
