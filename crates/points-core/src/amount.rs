//! # Amount Module
//!
//! Decimal amounts arrive as text (`"35.35"`) and the points rules do their
//! arithmetic on `f64`.
//!
//! ## Why Floating Point Here?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POINTS ARE NOT MONEY                                                   │
//! │                                                                         │
//! │  Nothing here is ever added to a ledger. The amounts only feed three    │
//! │  checks and one rounding:                                               │
//! │                                                                         │
//! │    total % 0.25 == 0        (quarter multiple)                         │
//! │    total > 10.00            (high total)                               │
//! │    ceil(price * 0.2)        (description bonus)                        │
//! │                                                                         │
//! │  Scores must match reference outputs that were produced with IEEE-754   │
//! │  doubles, so the same operations are used here.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::Points;

/// Quarter-dollar step used by the quarter-multiple rule.
pub const QUARTER: f64 = 0.25;

/// Fraction of an item price awarded by the description-length rule.
pub const PRICE_MULTIPLIER: f64 = 0.2;

/// Parses a decimal amount such as `"9.00"`.
///
/// Surrounding whitespace is not accepted. Returns `None` for anything
/// `f64` cannot parse, and for finite-looking text too large for `f64`
/// (`"1e400"`). Spelled-out infinities (`"inf"`, `"-Infinity"`) are kept.
///
/// ## Example
/// ```rust
/// use points_core::amount::parse_amount;
///
/// assert_eq!(parse_amount("35.35"), Some(35.35));
/// assert_eq!(parse_amount("abc"), None);
/// assert_eq!(parse_amount(" 1.00"), None);
/// assert_eq!(parse_amount("1e400"), None);
/// ```
pub fn parse_amount(text: &str) -> Option<f64> {
    let value = text.parse::<f64>().ok()?;
    if value.is_infinite() && !is_infinity_literal(text) {
        return None;
    }
    Some(value)
}

fn is_infinity_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// True when the amount text literally ends in `.00`.
///
/// This looks at the text, not the number: `"9"` and `"9.000"` are not
/// round-dollar amounts.
#[inline]
pub fn is_round_dollar(text: &str) -> bool {
    text.ends_with(".00")
}

/// True when `amount % 0.25` is exactly zero.
///
/// ## Example
/// ```rust
/// use points_core::amount::is_quarter_multiple;
///
/// assert!(is_quarter_multiple(9.00));
/// assert!(is_quarter_multiple(35.75));
/// assert!(!is_quarter_multiple(35.35));
/// ```
#[inline]
pub fn is_quarter_multiple(amount: f64) -> bool {
    amount % QUARTER == 0.0
}

/// Returns `ceil(price * 0.2)` as whole points.
///
/// Non-finite prices yield `None`. Negative prices contribute nothing.
///
/// ## Example
/// ```rust
/// use points_core::amount::fifth_rounded_up;
///
/// // 12.25 * 0.2 = 2.45 → 3
/// assert_eq!(fifth_rounded_up(12.25), Some(3));
/// assert_eq!(fifth_rounded_up(f64::NAN), None);
/// ```
pub fn fifth_rounded_up(price: f64) -> Option<Points> {
    let raw = (price * PRICE_MULTIPLIER).ceil();
    if !raw.is_finite() {
        return None;
    }
    if raw <= 0.0 {
        return Some(0);
    }
    // Float-to-int `as` saturates, so absurdly large prices clamp to u64::MAX
    Some(raw as Points)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("9.00"), Some(9.0));
        assert_eq!(parse_amount("0.25"), Some(0.25));
        assert_eq!(parse_amount("12"), Some(12.0));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("$9.00"), None);
        assert_eq!(parse_amount("9,00"), None);
    }

    #[test]
    fn test_parse_amount_rejects_overflow() {
        assert_eq!(parse_amount("1e400"), None);
        assert_eq!(parse_amount("-1e400"), None);
        assert_eq!(parse_amount("1e308"), Some(1e308));
        assert_eq!(parse_amount("1e-400"), Some(0.0));
    }

    #[test]
    fn test_parse_amount_keeps_infinity_literals() {
        assert_eq!(parse_amount("inf"), Some(f64::INFINITY));
        assert_eq!(parse_amount("+Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_amount("-INF"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_round_dollar_is_textual() {
        assert!(is_round_dollar("9.00"));
        assert!(is_round_dollar("100.00"));
        assert!(!is_round_dollar("9"));
        assert!(!is_round_dollar("9.000"));
        assert!(!is_round_dollar("9.01"));
    }

    #[test]
    fn test_quarter_multiple() {
        assert!(is_quarter_multiple(0.0));
        assert!(is_quarter_multiple(0.75));
        assert!(is_quarter_multiple(24.25));
        assert!(!is_quarter_multiple(0.10));
        assert!(!is_quarter_multiple(6.49));
    }

    #[test]
    fn test_fifth_rounded_up() {
        assert_eq!(fifth_rounded_up(12.25), Some(3)); // 2.45
        assert_eq!(fifth_rounded_up(12.00), Some(3)); // 2.4
        assert_eq!(fifth_rounded_up(5.00), Some(1)); // 1.0 exactly
        assert_eq!(fifth_rounded_up(0.0), Some(0));
        assert_eq!(fifth_rounded_up(-10.0), Some(0));
        assert_eq!(fifth_rounded_up(f64::INFINITY), None);
    }
}
