//! # Validation Module
//!
//! Structural checks a receipt must pass before it is scored.
//!
//! ## What Is (And Is Not) Checked
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: JSON decoding (points-api)                                   │
//! │  └── Wrong JSON types, broken syntax → MalformedInput                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── retailer, purchaseDate, purchaseTime, total non-empty             │
//! │  ├── at least one item                                                 │
//! │  └── every item has shortDescription and price                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Scoring                                                      │
//! │  └── Unparseable dates, times and amounts only cost their own rule     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use points_core::{validate_receipt, Item, Receipt, ValidationError};
//!
//! let mut receipt = Receipt {
//!     retailer: "Target".to_string(),
//!     purchase_date: "2022-01-01".to_string(),
//!     purchase_time: "13:01".to_string(),
//!     total: "6.49".to_string(),
//!     items: vec![Item::new("Mountain Dew 12PK", "6.49")],
//! };
//! assert!(validate_receipt(&receipt).is_ok());
//!
//! receipt.retailer.clear();
//! assert_eq!(
//!     validate_receipt(&receipt),
//!     Err(ValidationError::Required { field: "retailer" })
//! );
//! ```

use crate::error::ValidationError;
use crate::types::Receipt;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates that a receipt is complete enough to score.
///
/// ## Rules
/// - `retailer`, `purchaseDate`, `purchaseTime` and `total` are non-empty
/// - `items` is non-empty
/// - every item has a non-empty `shortDescription` and `price`
///
/// Fields are checked in that order and the first failure is returned.
/// Empty means zero-length: a whitespace-only retailer passes.
pub fn validate_receipt(receipt: &Receipt) -> ValidationResult<()> {
    let required = [
        ("retailer", &receipt.retailer),
        ("purchaseDate", &receipt.purchase_date),
        ("purchaseTime", &receipt.purchase_time),
        ("total", &receipt.total),
    ];

    for (field, value) in required {
        if value.is_empty() {
            return Err(ValidationError::Required { field });
        }
    }

    if receipt.items.is_empty() {
        return Err(ValidationError::NoItems);
    }

    for (index, item) in receipt.items.iter().enumerate() {
        if item.short_description.is_empty() {
            return Err(ValidationError::ItemFieldRequired {
                index,
                field: "shortDescription",
            });
        }
        if item.price.is_empty() {
            return Err(ValidationError::ItemFieldRequired {
                index,
                field: "price",
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Item;

    fn valid_receipt() -> Receipt {
        Receipt {
            retailer: "Walgreens".to_string(),
            purchase_date: "2022-01-02".to_string(),
            purchase_time: "08:13".to_string(),
            total: "2.65".to_string(),
            items: vec![
                Item::new("Pepsi - 12-oz", "1.25"),
                Item::new("Dasani", "1.40"),
            ],
        }
    }

    #[test]
    fn test_valid_receipt_passes() {
        assert!(validate_receipt(&valid_receipt()).is_ok());
    }

    #[test]
    fn test_missing_retailer() {
        let mut receipt = valid_receipt();
        receipt.retailer = String::new();

        assert_eq!(
            validate_receipt(&receipt),
            Err(ValidationError::Required { field: "retailer" })
        );
    }

    #[test]
    fn test_each_required_field() {
        let mut receipt = valid_receipt();
        receipt.purchase_date.clear();
        assert_eq!(
            validate_receipt(&receipt),
            Err(ValidationError::Required {
                field: "purchaseDate"
            })
        );

        let mut receipt = valid_receipt();
        receipt.purchase_time.clear();
        assert_eq!(
            validate_receipt(&receipt),
            Err(ValidationError::Required {
                field: "purchaseTime"
            })
        );

        let mut receipt = valid_receipt();
        receipt.total.clear();
        assert_eq!(
            validate_receipt(&receipt),
            Err(ValidationError::Required { field: "total" })
        );
    }

    #[test]
    fn test_first_violation_wins() {
        let receipt = Receipt::default();
        assert_eq!(
            validate_receipt(&receipt),
            Err(ValidationError::Required { field: "retailer" })
        );
    }

    #[test]
    fn test_no_items() {
        let mut receipt = valid_receipt();
        receipt.items.clear();

        assert_eq!(validate_receipt(&receipt), Err(ValidationError::NoItems));
    }

    #[test]
    fn test_empty_item_description() {
        let mut receipt = valid_receipt();
        receipt.items[1].short_description = String::new();

        assert_eq!(
            validate_receipt(&receipt),
            Err(ValidationError::ItemFieldRequired {
                index: 1,
                field: "shortDescription"
            })
        );
    }

    #[test]
    fn test_empty_item_price() {
        let mut receipt = valid_receipt();
        receipt.items[0].price = String::new();

        assert_eq!(
            validate_receipt(&receipt),
            Err(ValidationError::ItemFieldRequired {
                index: 0,
                field: "price"
            })
        );
    }

    #[test]
    fn test_malformed_numbers_are_tolerated() {
        let mut receipt = valid_receipt();
        receipt.total = "abc".to_string();
        receipt.purchase_date = "not a date".to_string();
        receipt.purchase_time = "25:99".to_string();
        receipt.items[0].price = "free".to_string();

        assert!(validate_receipt(&receipt).is_ok());
    }
}
