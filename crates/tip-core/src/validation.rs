//! # Validation Module
//!
//! Turns raw text from input fields into numbers the engine can use.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Input Paths                                        │
//! │                                                                         │
//! │  Bill field ("$49.50") ──► parse_bill_amount ──► Ok(49.5) / Err(...)   │
//! │                                                    │                    │
//! │                                                    └─ caller keeps the  │
//! │                                                       previous value    │
//! │                                                                         │
//! │  Tip field ("18%") ──────► parse_tip_percentage ─► Ok(18.0) / Err(...) │
//! │  Tip slider (33.4) ──────► clamp_to_slider ──────► 33.0 (never fails)  │
//! │                                                                         │
//! │  Split "Other" ("4") ────► parse_split_count ────► Some(4) / None      │
//! │                                                    │                    │
//! │                                                    └─ None means "1",   │
//! │                                                       silently          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tip_core::validation::{parse_bill_amount, parse_split_count};
//!
//! assert_eq!(parse_bill_amount("$12.34").unwrap(), 12.34);
//! assert_eq!(parse_split_count("4"), Some(4));
//! assert_eq!(parse_split_count("four"), None);
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::{
    COMMON_TIP_PERCENTAGES, MAX_BILL_AMOUNT, MAX_TIP_PERCENTAGE, TIP_SLIDER_MAX, TIP_SLIDER_MIN,
    TIP_SLIDER_STEP,
};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Amount Parsers
// =============================================================================

/// Parses a bill amount typed by the user.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - A leading `$` is allowed
/// - Must not be empty
/// - Must be a finite, non-negative number no larger than [`MAX_BILL_AMOUNT`]
///
/// ## Example
/// ```rust
/// use tip_core::validation::parse_bill_amount;
///
/// assert_eq!(parse_bill_amount(" 49.50 ").unwrap(), 49.5);
/// assert_eq!(parse_bill_amount("$0").unwrap(), 0.0);
/// assert!(parse_bill_amount("").is_err());
/// assert!(parse_bill_amount("-5").is_err());
/// assert!(parse_bill_amount("1e308").is_err());
/// ```
pub fn parse_bill_amount(input: &str) -> ValidationResult<f64> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();
    parse_non_negative("bill amount", digits, MAX_BILL_AMOUNT)
}

/// Parses a tip percentage typed by the user.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - A trailing `%` is allowed
/// - Must be a finite, non-negative number
/// - A typed 80% is honored even though the slider stops at 50; only values
///   above [`MAX_TIP_PERCENTAGE`] are refused
pub fn parse_tip_percentage(input: &str) -> ValidationResult<f64> {
    let trimmed = input.trim();
    let digits = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    parse_non_negative("tip percentage", digits, MAX_TIP_PERCENTAGE)
}

fn parse_non_negative(field: &str, digits: &str, max: f64) -> ValidationResult<f64> {
    if digits.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    let value: f64 = digits.parse().map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: format!("'{}' is not a number", digits),
    })?;

    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    if value > max {
        return Err(ValidationError::TooLarge {
            field: field.to_string(),
            max,
        });
    }

    Ok(value)
}

// =============================================================================
// Split Count
// =============================================================================

/// Parses a party size.
///
/// Returns `None` for anything that isn't a positive integer: empty text,
/// words, decimals, zero, negatives, values too large for `u32`, and text
/// with surrounding whitespace. Callers treat `None` as one person.
pub fn parse_split_count(input: &str) -> Option<u32> {
    match input.parse::<u32>() {
        Ok(0) | Err(_) => None,
        Ok(n) => Some(n),
    }
}

// =============================================================================
// Slider
// =============================================================================

/// Snaps a slider position to a whole percent inside the slider range.
///
/// ## Example
/// ```rust
/// use tip_core::validation::clamp_to_slider;
///
/// assert_eq!(clamp_to_slider(33.4), 33.0);
/// assert_eq!(clamp_to_slider(0.0), 1.0);
/// assert_eq!(clamp_to_slider(75.0), 50.0);
/// ```
pub fn clamp_to_slider(percentage: f64) -> f64 {
    if !percentage.is_finite() {
        return TIP_SLIDER_MIN;
    }

    let stepped = (percentage / TIP_SLIDER_STEP).round() * TIP_SLIDER_STEP;
    stepped.clamp(TIP_SLIDER_MIN, TIP_SLIDER_MAX)
}

// =============================================================================
// Presets
// =============================================================================

/// Picks one of the quick-pick tip percentages.
///
/// ## Example
/// ```rust
/// use tip_core::validation::select_common_percentage;
///
/// assert_eq!(select_common_percentage(18.0).unwrap(), 18.0);
/// assert!(select_common_percentage(12.0).is_err());
/// ```
pub fn select_common_percentage(requested: f64) -> CoreResult<f64> {
    COMMON_TIP_PERCENTAGES
        .iter()
        .map(|&p| f64::from(p))
        .find(|&p| p == requested)
        .ok_or_else(|| CoreError::UnknownPreset {
            requested,
            allowed: COMMON_TIP_PERCENTAGES.to_vec(),
        })
}

// =============================================================================
// Unit Tests
// =============================================================================
