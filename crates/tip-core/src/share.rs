//! # Share Text
//!
//! Renders the plain-text summary a user sends to the people they split the
//! bill with. This is a consumer of engine output, not part of the engine.
//!
//! ## Format
//! ```text
//! Bill amount: $50.00
//! Tip percentage: 20.0%
//! Tip: $10.00
//! Grand total: $60.00
//! Total per person: $30.00
//! Tip per person: $5.00
//! ```
//!
//! The percentage line shows the *effective* tip percentage, so friends see
//! what was actually charged once rounding or the tip floor applied.

use crate::money::Money;
use crate::types::{BillState, TipBreakdown};

/// Builds the share text for a bill and its breakdown.
///
/// Currency values use two decimals, the percentage one decimal.
///
/// ## Example
/// ```rust
/// use tip_core::{share::share_text, BillState, SplitSelection};
///
/// let state = BillState::new(50.0, 20.0).with_split(SplitSelection::Fixed(2));
/// let text = share_text(&state, &state.breakdown(), "$");
///
/// assert!(text.starts_with("Bill amount: $50.00\nTip percentage: 20.0%\n"));
/// assert!(text.ends_with("Tip per person: $5.00"));
/// ```
pub fn share_text(state: &BillState, breakdown: &TipBreakdown, currency_symbol: &str) -> String {
    let money = |amount: f64| Money::from_amount(amount).format_with_symbol(currency_symbol);

    [
        format!("Bill amount: {}", money(state.bill_amount)),
        format!(
            "Tip percentage: {}%",
            format_percentage(breakdown.effective_tip_percentage)
        ),
        format!("Tip: {}", money(breakdown.tip)),
        format!("Grand total: {}", money(breakdown.total)),
        format!("Total per person: {}", money(breakdown.split_total)),
        format!("Tip per person: {}", money(breakdown.split_tip)),
    ]
    .join("\n")
}

/// Formats a percentage with one decimal place (`19.191… → "19.2"`).
pub fn format_percentage(percentage: f64) -> String {
    format!("{:.1}", percentage)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SplitSelection;

    #[test]
    fn test_share_text_even_split() {
        let state = BillState::new(50.0, 20.0).with_split(SplitSelection::Fixed(2));
        let text = share_text(&state, &state.breakdown(), "$");

        assert_eq!(
            text,
            "Bill amount: $50.00\n\
             Tip percentage: 20.0%\n\
             Tip: $10.00\n\
             Grand total: $60.00\n\
             Total per person: $30.00\n\
             Tip per person: $5.00"
        );
    }

    #[test]
    fn test_share_text_uses_effective_percentage() {
        // 20% selected, rounding brings the actual tip to 9.50 / 49.50 = 19.19%
        let state = BillState::new(49.50, 20.0).with_rounding(true);
        let text = share_text(&state, &state.breakdown(), "$");

        assert!(text.contains("Tip percentage: 19.2%"));
        assert!(text.contains("Tip: $9.50"));
        assert!(text.contains("Grand total: $59.00"));
    }

    #[test]
    fn test_share_text_zero_bill() {
        let state = BillState::default();
        let text = share_text(&state, &state.breakdown(), "€");

        assert!(text.contains("Bill amount: €0.00"));
        assert!(text.contains("Tip percentage: 0.0%"));
        assert!(text.contains("Grand total: €0.00"));
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(20.0), "20.0");
        assert_eq!(format_percentage(19.1919), "19.2");
        assert_eq!(format_percentage(0.0), "0.0");
    }
}
