//! # Error Types
//!
//! Domain-specific error types for tip-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tip-core errors (this file)                                           │
//! │  ├── CoreError        - Preset lookups, wraps validation               │
//! │  └── ValidationError  - Raw text input that cannot become a number     │
//! │                                                                         │
//! │  tip-cli errors (app crate)                                            │
//! │  └── CliError         - What the terminal sees (code + message)        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr / JSON          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Where Errors Stop
//! The engine ([`crate::engine`]) never returns an error. Zero bills, odd
//! percentages and unparseable split counts are normalized to safe defaults.
//! Errors only exist at the text boundary, where the caller decides whether
//! to keep the previous value or tell the user.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A preset tip percentage was requested that is not offered.
    ///
    /// ## When This Occurs
    /// - `preset 12` in the session (only 10/15/18/20/25 exist)
    #[error("{requested}% is not a preset tip percentage (choose one of {allowed:?})")]
    UnknownPreset { requested: f64, allowed: Vec<u32> },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user-typed text doesn't describe a usable number.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Text could not be read as a number.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value parsed but is below zero.
    #[error("{field} cannot be negative")]
    Negative { field: String },

    /// Value parsed to NaN or infinity.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Value is larger than the totals can be shown for.
    #[error("{field} cannot be larger than {max}")]
    TooLarge { field: String, max: f64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
