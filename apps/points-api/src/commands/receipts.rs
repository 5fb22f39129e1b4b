//! # Receipt Commands

use serde::Serialize;
use tracing::{debug, info, warn};

use points_core::{score_breakdown, validate_receipt, CoreError, Points, Receipt, ReceiptId};
use points_store::ReceiptStore;

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessReceiptResponse {
    pub id: ReceiptId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointsResponse {
    pub points: Points,
}

/// Decodes, validates and scores a receipt, then stores the score.
///
/// Nothing is stored unless every step before the insert succeeds.
pub fn process_receipt(
    store: &ReceiptStore,
    body: &[u8],
) -> Result<ProcessReceiptResponse, ApiError> {
    if body.is_empty() {
        warn!("receipt submission with empty body");
        return Err(ApiError::empty_body());
    }

    let receipt: Receipt = serde_json::from_slice(body).map_err(CoreError::from)?;
    validate_receipt(&receipt).map_err(CoreError::from)?;

    let breakdown = score_breakdown(&receipt);
    let points = breakdown.total();
    if !breakdown.total_parsed {
        debug!(total = %receipt.total, "total unparseable, scored retailer only");
    }

    let id = store.put(points);
    info!(%id, points, retailer = %receipt.retailer, "receipt processed");

    Ok(ProcessReceiptResponse { id })
}

/// Looks up the points stored for a receipt id.
pub fn get_points(store: &ReceiptStore, id: &str) -> Result<PointsResponse, ApiError> {
    if id.trim().is_empty() {
        warn!("points lookup with blank id");
        return Err(ApiError::missing_id());
    }

    let points = store.get(id)?;
    debug!(id, points, "points lookup");

    Ok(PointsResponse { points })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    const CORNER_MARKET: &str = r#"{
        "retailer": "M&M Corner Market",
        "purchaseDate": "2022-03-20",
        "purchaseTime": "14:33",
        "items": [
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" }
        ],
        "total": "9.00"
    }"#;

    #[test]
    fn test_process_then_get() {
        let store = ReceiptStore::new();

        let processed = process_receipt(&store, CORNER_MARKET.as_bytes()).unwrap();
        let response = get_points(&store, processed.id.as_str()).unwrap();

        // 14 + 50 + 25 + 10 + 10
        assert_eq!(response, PointsResponse { points: 109 });
    }

    #[test]
    fn test_empty_body() {
        let store = ReceiptStore::new();

        let err = process_receipt(&store, b"").unwrap_err();
        assert_eq!(err, ApiError::empty_body());
        assert!(store.is_empty());
    }

    #[test]
    fn test_truncated_json() {
        let store = ReceiptStore::new();

        let err = process_receipt(&store, br#"{ "retailer": "Test Store", "items": ["#).unwrap_err();
        assert_eq!(err.code, ErrorCode::MalformedInput);
        assert!(store.is_empty());
    }

    #[test]
    fn test_missing_retailer_is_invalid_not_malformed() {
        let store = ReceiptStore::new();
        let body = r#"{
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:00",
            "items": [{ "shortDescription": "Dasani", "price": "1.40" }],
            "total": "1.40"
        }"#;

        let err = process_receipt(&store, body.as_bytes()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidReceipt);
        assert!(store.is_empty());
    }

    #[test]
    fn test_null_retailer_is_invalid_not_malformed() {
        let store = ReceiptStore::new();
        let body = r#"{
            "retailer": null,
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:00",
            "items": [{ "shortDescription": "Dasani", "price": "1.40" }],
            "total": "1.40"
        }"#;

        let err = process_receipt(&store, body.as_bytes()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidReceipt);
        assert!(store.is_empty());
    }

    #[test]
    fn test_empty_item_description() {
        let store = ReceiptStore::new();
        let body = r#"{
            "retailer": "Test Store",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:00",
            "items": [{ "shortDescription": "", "price": "5.00" }],
            "total": "5.00"
        }"#;

        let err = process_receipt(&store, body.as_bytes()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidReceipt);
    }

    #[test]
    fn test_malformed_total_is_still_accepted() {
        let store = ReceiptStore::new();
        let body = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "14:01",
            "items": [{ "shortDescription": "Emils Cheese Pizza", "price": "12.25" }],
            "total": "abc"
        }"#;

        let processed = process_receipt(&store, body.as_bytes()).unwrap();
        assert_eq!(get_points(&store, processed.id.as_str()).unwrap().points, 6);
    }

    #[test]
    fn test_get_unknown_and_blank_ids() {
        let store = ReceiptStore::new();

        assert_eq!(
            get_points(&store, "fake-id").unwrap_err().code,
            ErrorCode::NotFound
        );
        assert_eq!(get_points(&store, "  ").unwrap_err(), ApiError::missing_id());
    }
}
