//! # tip-core: Pure Business Logic for Tip50
//!
//! This crate is the **heart** of Tip50. It turns a bill amount, a tip
//! percentage, a rounding choice and a party size into a tip, a grand total
//! and per-person shares, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tip50 Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation layer (tip-cli)                    │   │
//! │  │    bill field ──► tip slider ──► round toggle ──► split picker  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ BillState (owned by the caller)        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ tip-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  engine   │  │   types   │  │validation │  │   share   │  │   │
//! │  │   │  totals   │  │ BillState │  │ text →    │  │  summary  │  │   │
//! │  │   │  split    │  │ Breakdown │  │  numbers  │  │   text    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STATE • NO LOGGING • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`engine`] - The tip/total computation rules
//! - [`types`] - Domain types (BillState, TipBreakdown, SplitSelection)
//! - [`validation`] - Parsing raw text input into sanitized numbers
//! - [`money`] - Cent-based display type for rendering amounts
//! - [`share`] - Plain-text summary for sharing
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **Total Is The Source Of Truth**: The tip is always `total - bill`
//! 3. **Never Fail On Numbers**: Odd inputs degrade to safe defaults, not errors
//! 4. **Nothing Cached**: Outputs are recomputed from `BillState` on every read
//!
//! ## Example Usage
//!
//! ```rust
//! use tip_core::engine::compute_totals;
//!
//! let breakdown = compute_totals(50.0, 20.0, false, 2);
//!
//! assert!((breakdown.tip - 10.0).abs() < 1e-9);
//! assert!((breakdown.total - 60.0).abs() < 1e-9);
//! assert!((breakdown.split_total - 30.0).abs() < 1e-9);
//! assert!((breakdown.split_tip - 5.0).abs() < 1e-9);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod engine;
pub mod error;
pub mod money;
pub mod share;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tip_core::BillState` instead of
// `use tip_core::types::BillState`

pub use engine::{compute_totals, resolve_split_count};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Smallest tip ever charged on a non-zero bill: one minor currency unit.
pub const MIN_TIP_AMOUNT: f64 = 0.01;

/// Minimum tip as a fraction of the bill (1%).
///
/// ## Business Reason
/// People opening a tip calculator intend to tip something. The floor is
/// whichever is larger of 1% and one cent.
pub const MIN_TIP_RATE: f64 = 0.01;

/// Largest bill the text parsers accept.
///
/// Keeps every total finite and inside what `Money` can show in cents.
pub const MAX_BILL_AMOUNT: f64 = 1_000_000_000.0;

/// Largest typed tip percentage the text parsers accept.
pub const MAX_TIP_PERCENTAGE: f64 = 1000.0;

/// Tip percentage selected when the app starts.
pub const DEFAULT_TIP_PERCENTAGE: f64 = 20.0;

/// Quick-pick tip percentages shown under the slider.
pub const COMMON_TIP_PERCENTAGES: [u32; 5] = [10, 15, 18, 20, 25];

/// Slider lower bound (percent).
pub const TIP_SLIDER_MIN: f64 = 1.0;

/// Slider upper bound (percent).
pub const TIP_SLIDER_MAX: f64 = 50.0;

/// Slider step (whole percents only).
pub const TIP_SLIDER_STEP: f64 = 1.0;

/// Party sizes offered directly by the split picker.
pub const SPLIT_PRESETS: [u32; 6] = [1, 2, 3, 4, 5, 6];

/// Picker tag that switches to free-form party size entry.
pub const OTHER_SELECTION: &str = "Other";

/// Split count used whenever the party size can't be read.
pub const DEFAULT_SPLIT_COUNT: u32 = 1;
