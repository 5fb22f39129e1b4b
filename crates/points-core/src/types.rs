//! # Domain Types
//!
//! The receipt as submitted, and the identifier its score is stored under.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Receipt      │   │      Item       │   │   ReceiptId     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  retailer       │──►│  short_desc     │   │  UUID v4 text   │       │
//! │  │  purchase_date  │   │  price (text)   │   │  opaque token   │       │
//! │  │  purchase_time  │   └─────────────────┘   └─────────────────┘       │
//! │  │  total (text)   │                                                    │
//! │  │  items          │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Is Everything Text?
//! Amounts stay as the submitted strings so the round-dollar rule can look
//! at the literal `.00` suffix. Dates and times stay as text because a
//! malformed value only costs the rule that reads it, not the submission.

use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Borrow;
use std::fmt;
use uuid::Uuid;

/// A points total.
pub type Points = u64;

// =============================================================================
// Receipt
// =============================================================================

/// A purchase receipt as submitted by a client.
///
/// Absent or `null` JSON fields decode to empty values so that
/// validation, not decoding, reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Receipt {
    /// Retailer or store name.
    #[serde(deserialize_with = "null_as_empty")]
    pub retailer: String,

    /// Purchase date, `YYYY-MM-DD`.
    #[serde(deserialize_with = "null_as_empty")]
    pub purchase_date: String,

    /// Purchase time, 24-hour `HH:MM`.
    #[serde(deserialize_with = "null_as_empty")]
    pub purchase_time: String,

    /// Total paid, decimal text such as `"35.35"`.
    #[serde(deserialize_with = "null_as_empty")]
    pub total: String,

    /// Line items in receipt order.
    #[serde(deserialize_with = "null_as_empty")]
    pub items: Vec<Item>,
}

// =============================================================================
// Item
// =============================================================================

/// One line on a receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Item {
    /// Product description; may carry surrounding whitespace.
    #[serde(deserialize_with = "null_as_empty")]
    pub short_description: String,

    /// Price, decimal text such as `"6.49"`.
    #[serde(deserialize_with = "null_as_empty")]
    pub price: String,
}

impl Item {
    /// Creates an item from a description and a price string.
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Item {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

/// Decodes `null` the same as an absent field.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// Receipt Identifier
// =============================================================================

/// Opaque identifier a score is stored under.
///
/// Freshly generated ids are hyphenated lowercase UUID v4 strings, but
/// callers must not rely on the format. Any string can be used for lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ReceiptId(String);

impl ReceiptId {
    /// Generates a new random identifier.
    pub fn generate() -> Self {
        ReceiptId(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ReceiptId {
    fn from(id: &str) -> Self {
        ReceiptId(id.to_string())
    }
}

/// Lets maps keyed by `ReceiptId` be queried with a plain `&str`.
impl Borrow<str> for ReceiptId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_uses_camel_case_field_names() {
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [{ "shortDescription": "Mountain Dew 12PK", "price": "6.49" }],
            "total": "6.49"
        }"#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.purchase_date, "2022-01-01");
        assert_eq!(receipt.purchase_time, "13:01");
        assert_eq!(receipt.total, "6.49");
        assert_eq!(receipt.items, vec![Item::new("Mountain Dew 12PK", "6.49")]);
    }

    #[test]
    fn test_missing_fields_decode_as_empty() {
        let receipt: Receipt = serde_json::from_str(r#"{ "items": [{}] }"#).unwrap();
        assert!(receipt.retailer.is_empty());
        assert!(receipt.total.is_empty());
        assert_eq!(receipt.items.len(), 1);
        assert!(receipt.items[0].short_description.is_empty());
    }

    #[test]
    fn test_null_fields_decode_as_empty() {
        let json = r#"{
            "retailer": null,
            "purchaseDate": "2022-01-01",
            "purchaseTime": null,
            "total": "6.49",
            "items": [{ "shortDescription": null, "price": "6.49" }]
        }"#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert!(receipt.retailer.is_empty());
        assert!(receipt.purchase_time.is_empty());
        assert_eq!(receipt.purchase_date, "2022-01-01");
        assert_eq!(receipt.items, vec![Item::new("", "6.49")]);

        let receipt: Receipt = serde_json::from_str(r#"{ "items": null }"#).unwrap();
        assert!(receipt.items.is_empty());
    }

    #[test]
    fn test_wrong_field_type_is_rejected() {
        let result = serde_json::from_str::<Receipt>(r#"{ "retailer": 5 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_generated_ids_are_uuids_and_distinct() {
        let a = ReceiptId::generate();
        let b = ReceiptId::generate();

        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_receipt_id_serializes_as_plain_string() {
        let id = ReceiptId::from("abc-123");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""abc-123""#);
        assert_eq!(id.to_string(), "abc-123");
    }
}
