//! # Domain Types
//!
//! Core domain types used throughout Tip50.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────┐        ┌───────────────────────────────┐     │
//! │  │      BillState       │        │         TipBreakdown          │     │
//! │  │  ──────────────────  │ engine │  ───────────────────────────  │     │
//! │  │  bill_amount         │ ─────► │  unrounded_total              │     │
//! │  │  tip_percentage      │        │  total (source of truth)      │     │
//! │  │  round_to_nearest    │        │  tip = total - bill           │     │
//! │  │  split ──────┐       │        │  effective_tip_percentage     │     │
//! │  └──────────────┼───────┘        │  split_count                  │     │
//! │                 ▼                │  split_total / split_tip      │     │
//! │  ┌──────────────────────┐        └───────────────────────────────┘     │
//! │  │   SplitSelection     │                                               │
//! │  │  Fixed(n) | Other(s) │                                               │
//! │  └──────────────────────┘                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! `BillState` belongs to the presentation layer, which mutates it as the
//! user types. `TipBreakdown` is a throwaway snapshot: compute it, render
//! it, drop it. Never store one next to the state it came from.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::engine;
use crate::validation::parse_split_count;
use crate::{DEFAULT_SPLIT_COUNT, DEFAULT_TIP_PERCENTAGE, OTHER_SELECTION};

// =============================================================================
// Split Selection
// =============================================================================

/// What the party-size picker currently says.
///
/// ## Why Not Just a Number?
/// The picker offers 1-6 plus "Other". When "Other" is chosen the user types
/// the party size, and whatever they typed (possibly garbage) is kept as-is so
/// the field can be re-rendered. Resolving the count happens on read, and the
/// fall back to 1 lives in exactly one place: [`SplitSelection::count`].
///
/// ## Serialization
/// ```json
/// { "kind": "fixed", "value": 3 }
/// { "kind": "other", "value": "7" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum SplitSelection {
    /// One of the picker presets.
    Fixed(u32),

    /// Free-form text typed after choosing "Other".
    Other(String),
}

impl SplitSelection {
    /// Builds a selection from the picker tag and the "Other" text field.
    ///
    /// A tag that is neither `"Other"` nor a positive integer becomes
    /// `Fixed(1)`.
    ///
    /// ## Example
    /// ```rust
    /// use tip_core::SplitSelection;
    ///
    /// assert_eq!(SplitSelection::from_picker("3", ""), SplitSelection::Fixed(3));
    /// assert_eq!(
    ///     SplitSelection::from_picker("Other", "8"),
    ///     SplitSelection::Other("8".to_string())
    /// );
    /// assert_eq!(SplitSelection::from_picker("lots", ""), SplitSelection::Fixed(1));
    /// ```
    pub fn from_picker(selection: &str, other_value: &str) -> Self {
        if selection == OTHER_SELECTION {
            return SplitSelection::Other(other_value.to_string());
        }

        SplitSelection::Fixed(parse_split_count(selection).unwrap_or(DEFAULT_SPLIT_COUNT))
    }

    /// Resolves the number of people splitting the bill (always >= 1).
    pub fn count(&self) -> u32 {
        match self {
            SplitSelection::Fixed(0) => DEFAULT_SPLIT_COUNT,
            SplitSelection::Fixed(n) => *n,
            SplitSelection::Other(raw) => parse_split_count(raw).unwrap_or(DEFAULT_SPLIT_COUNT),
        }
    }

    /// The picker tag this selection corresponds to (`"1"`..`"6"` or `"Other"`).
    pub fn tag(&self) -> String {
        match self {
            SplitSelection::Fixed(n) => n.to_string(),
            SplitSelection::Other(_) => OTHER_SELECTION.to_string(),
        }
    }
}

impl Default for SplitSelection {
    fn default() -> Self {
        SplitSelection::Fixed(DEFAULT_SPLIT_COUNT)
    }
}

// =============================================================================
// Bill State
// =============================================================================

/// Everything the user has entered about the bill.
///
/// ## Fields
/// - `bill_amount`: >= 0, zero means "nothing to pay"
/// - `tip_percentage`: usually 1-50 from the slider, unbounded when typed
/// - `round_to_nearest`: round the grand total to a whole currency unit
/// - `split`: party-size picker state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BillState {
    pub bill_amount: f64,
    pub tip_percentage: f64,
    pub round_to_nearest: bool,
    pub split: SplitSelection,
}

impl BillState {
    /// Creates a state with rounding off and a party of one.
    pub fn new(bill_amount: f64, tip_percentage: f64) -> Self {
        BillState {
            bill_amount,
            tip_percentage,
            round_to_nearest: false,
            split: SplitSelection::default(),
        }
    }

    /// Sets the rounding toggle.
    pub fn with_rounding(mut self, round_to_nearest: bool) -> Self {
        self.round_to_nearest = round_to_nearest;
        self
    }

    /// Sets the party-size selection.
    pub fn with_split(mut self, split: SplitSelection) -> Self {
        self.split = split;
        self
    }

    /// Resolved number of people (always >= 1).
    pub fn split_count(&self) -> u32 {
        self.split.count()
    }

    /// Runs the engine over the current state.
    ///
    /// Call this every time something is rendered; the result is only valid
    /// for the state it was computed from.
    pub fn breakdown(&self) -> TipBreakdown {
        engine::compute_totals(
            self.bill_amount,
            self.tip_percentage,
            self.round_to_nearest,
            self.split_count(),
        )
    }
}

impl Default for BillState {
    /// Start-up state: no bill, 20% tip, no rounding, one person.
    fn default() -> Self {
        BillState::new(0.0, DEFAULT_TIP_PERCENTAGE)
    }
}

// =============================================================================
// Tip Breakdown
// =============================================================================

/// Engine output for one `BillState`.
///
/// ## Invariants
/// - `tip == total - bill_amount` (tip is derived, never computed alone)
/// - `split_total * split_count ≈ total`
/// - `split_tip * split_count ≈ tip`
/// - All zeros when the bill is zero
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TipBreakdown {
    /// Bill plus tip before any whole-unit rounding.
    pub unrounded_total: f64,

    /// Grand total actually charged.
    pub total: f64,

    /// Tip actually charged (`total - bill`).
    pub tip: f64,

    /// Tip as a percentage of the bill after rounding and the tip floor.
    pub effective_tip_percentage: f64,

    /// Number of people the bill is split between (>= 1).
    pub split_count: u32,

    /// Each person's share of the grand total (unrounded).
    pub split_total: f64,

    /// Each person's share of the tip (unrounded).
    pub split_tip: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================
