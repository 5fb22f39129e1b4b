//! # Scoring Engine
//!
//! Maps a validated receipt to a points total through eight additive rules.
//!
//! ## Rule Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  #  Rule                      Award                 Reads               │
//! │  ─  ────────────────────────  ────────────────────  ─────────────────── │
//! │  1  Retailer alphanumerics    +1 per char           retailer            │
//! │  2  Round-dollar total        +50                   total (text)        │
//! │  3  Quarter multiple          +25                   total (f64)         │
//! │  4  Item pairs                +5 per pair           items.len()         │
//! │  5  Description length % 3    +ceil(price * 0.2)    items               │
//! │  6  Total over 10.00          +5                    total (f64)         │
//! │  7  Odd purchase day          +6                    purchaseDate        │
//! │  8  Purchase hour is 14       +10                   purchaseTime        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Parse Failures
//! ```text
//! total unparseable ──► stop after rule 1 (rules 2-8 all score 0)
//! item price bad    ──► that item's rule 5 bonus is 0, others still count
//! date bad          ──► rule 7 scores 0
//! time bad          ──► rule 8 scores 0
//! ```
//!
//! Dates must be exactly `YYYY-MM-DD` and times `H:MM` or `HH:MM`. chrono
//! alone would also take `2022-1-5` or ` 14:30`, so the shape is checked
//! before parsing.
//!
//! The total-parse early exit also zeroes rules 4, 5, 7 and 8, which never
//! read the total.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::Serialize;
use tracing::debug;
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::amount::{fifth_rounded_up, is_quarter_multiple, is_round_dollar, parse_amount};
use crate::types::{Item, Points, Receipt};

// =============================================================================
// Rule Constants
// =============================================================================

/// Rule 2 award.
pub const ROUND_DOLLAR_POINTS: Points = 50;

/// Rule 3 award.
pub const QUARTER_MULTIPLE_POINTS: Points = 25;

/// Rule 4 award per complete pair of items.
pub const ITEM_PAIR_POINTS: Points = 5;

/// Rule 5 applies when the trimmed description length is a multiple of this.
pub const DESCRIPTION_LENGTH_DIVISOR: usize = 3;

/// Rule 6 threshold (strictly greater than).
pub const HIGH_TOTAL_THRESHOLD: f64 = 10.00;

/// Rule 6 award.
pub const HIGH_TOTAL_POINTS: Points = 5;

/// Rule 7 award.
pub const ODD_DAY_POINTS: Points = 6;

/// Rule 8 hour (24-hour clock).
pub const AFTERNOON_HOUR: u32 = 14;

/// Rule 8 award.
pub const AFTERNOON_POINTS: Points = 10;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

// =============================================================================
// Score Breakdown
// =============================================================================

/// Points contributed by each rule for one receipt.
///
/// Skipped rules contribute 0. `total_parsed` is false when the total could
/// not be parsed and everything after rule 1 was skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub retailer_alphanumeric: Points,
    pub round_dollar: Points,
    pub quarter_multiple: Points,
    pub item_pairs: Points,
    pub description_length: Points,
    pub high_total: Points,
    pub odd_day: Points,
    pub afternoon: Points,
    pub total_parsed: bool,
}

impl ScoreBreakdown {
    /// Sum of all rule contributions.
    pub fn total(&self) -> Points {
        [
            self.retailer_alphanumeric,
            self.round_dollar,
            self.quarter_multiple,
            self.item_pairs,
            self.description_length,
            self.high_total,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0, Points::saturating_add)
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Scores a receipt.
///
/// Pure and deterministic. The receipt should already have passed
/// [`validate_receipt`](crate::validation::validate_receipt); scoring an
/// unvalidated receipt never panics but the result is meaningless.
///
/// ## Example
/// ```rust
/// use points_core::{score_receipt, Item, Receipt};
///
/// let receipt = Receipt {
///     retailer: "Target".to_string(),
///     purchase_date: "2022-01-01".to_string(),
///     purchase_time: "13:01".to_string(),
///     total: "abc".to_string(),
///     items: vec![Item::new("Mountain Dew 12PK", "6.49")],
/// };
///
/// // Unparseable total: only the 6 retailer characters count
/// assert_eq!(score_receipt(&receipt), 6);
/// ```
pub fn score_receipt(receipt: &Receipt) -> Points {
    score_breakdown(receipt).total()
}

/// Scores a receipt and reports what each rule contributed.
pub fn score_breakdown(receipt: &Receipt) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown {
        retailer_alphanumeric: retailer_points(&receipt.retailer),
        ..ScoreBreakdown::default()
    };

    let Some(total) = parse_amount(&receipt.total) else {
        debug!(total = %receipt.total, "total unparseable, skipping rules 2-8");
        return breakdown;
    };
    breakdown.total_parsed = true;

    if is_round_dollar(&receipt.total) {
        breakdown.round_dollar = ROUND_DOLLAR_POINTS;
    }

    if is_quarter_multiple(total) {
        breakdown.quarter_multiple = QUARTER_MULTIPLE_POINTS;
    }

    breakdown.item_pairs = (receipt.items.len() / 2) as Points * ITEM_PAIR_POINTS;

    breakdown.description_length = receipt
        .items
        .iter()
        .map(description_points)
        .fold(0, Points::saturating_add);

    if total > HIGH_TOTAL_THRESHOLD {
        breakdown.high_total = HIGH_TOTAL_POINTS;
    }

    breakdown.odd_day = odd_day_points(&receipt.purchase_date);
    breakdown.afternoon = afternoon_points(&receipt.purchase_time);

    debug!(?breakdown, "receipt scored");
    breakdown
}

// =============================================================================
// Individual Rules
// =============================================================================

/// Rule 1: one point per letter or digit.
fn retailer_points(retailer: &str) -> Points {
    retailer.chars().filter(|&c| is_letter_or_digit(c)).count() as Points
}

/// Letters (`L*`) and decimal digits (`Nd`) only. Fractions, superscripts,
/// roman numerals and combining marks do not count.
fn is_letter_or_digit(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
    )
}

/// Rule 5 for a single item.
///
/// Length is measured in UTF-8 bytes after trimming, so `"Café"` counts 5.
fn description_points(item: &Item) -> Points {
    let trimmed = item.short_description.trim();
    if trimmed.len() % DESCRIPTION_LENGTH_DIVISOR != 0 {
        return 0;
    }

    parse_amount(&item.price)
        .and_then(fifth_rounded_up)
        .unwrap_or(0)
}

/// Rule 7.
fn odd_day_points(purchase_date: &str) -> Points {
    if !is_date_shaped(purchase_date) {
        debug!(purchase_date, "purchase date not YYYY-MM-DD, skipping rule 7");
        return 0;
    }

    match NaiveDate::parse_from_str(purchase_date, DATE_FORMAT) {
        Ok(date) if date.day() % 2 == 1 => ODD_DAY_POINTS,
        Ok(_) => 0,
        Err(e) => {
            debug!(purchase_date, error = %e, "purchase date unparseable, skipping rule 7");
            0
        }
    }
}

/// Rule 8.
fn afternoon_points(purchase_time: &str) -> Points {
    if !is_time_shaped(purchase_time) {
        debug!(purchase_time, "purchase time not HH:MM, skipping rule 8");
        return 0;
    }

    match NaiveTime::parse_from_str(purchase_time, TIME_FORMAT) {
        Ok(time) if time.hour() == AFTERNOON_HOUR => AFTERNOON_POINTS,
        Ok(_) => 0,
        Err(e) => {
            debug!(purchase_time, error = %e, "purchase time unparseable, skipping rule 8");
            0
        }
    }
}

/// `dddd-dd-dd`, nothing before or after.
fn is_date_shaped(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// One or two hour digits, a colon, then exactly two minute digits.
fn is_time_shaped(text: &str) -> bool {
    let Some((hour, minute)) = text.split_once(':') else {
        return false;
    };
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    matches!(hour.len(), 1 | 2) && minute.len() == 2 && all_digits(hour) && all_digits(minute)
}

// =============================================================================
// Unit Tests
// =============================================================================
