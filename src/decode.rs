//! JSON decoding for validated success bodies.
//!
//! Wire field names use underscores and land on matching snake_case
//! fields; closed string sets decode into enums and ISO-8601 dates into
//! `chrono` types via the serde derives on the DTOs. Parser failures are
//! wrapped in [`ApiError::Decode`] and never surfaced raw.

use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};

/// Decode a success body into `T`.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(ApiError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ComplianceStatus, Receipt, UserSettings};

    #[test]
    fn underscore_fields_land_on_snake_case_fields() {
        let body = br#"{
            "user_id": "7b1f9f86-4a71-4f38-9ce9-4a4f5a8d2c11",
            "working_country_code": "BE",
            "residence_country_code": "FR",
            "homeworking_threshold": 34,
            "working_days": [0, 1, 2, 3, 4]
        }"#;

        let settings: UserSettings = decode_json(body).unwrap();
        assert_eq!(settings.working_country_code, "BE");
        assert_eq!(settings.residence_country_code, "FR");
        assert_eq!(settings.working_days, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn status_strings_decode_into_enums() {
        assert_eq!(
            decode_json::<ComplianceStatus>(br#""at_risk""#).unwrap(),
            ComplianceStatus::AtRisk
        );
        assert_eq!(
            decode_json::<ComplianceStatus>(br#""compliant""#).unwrap(),
            ComplianceStatus::Compliant
        );
    }

    #[test]
    fn iso_8601_dates_parse_into_chrono_types() {
        let body = br#"{
            "id": "0a0c2c0e-8f3a-4e64-9d6e-0f2f3f6f7a88",
            "user_id": "7b1f9f86-4a71-4f38-9ce9-4a4f5a8d2c11",
            "receipt_date": "2024-03-18",
            "ocr_status": "success",
            "storage_path": "receipts/2024/03/18.jpg",
            "image_url": "https://cdn.example.com/r/18.jpg",
            "notes": null,
            "created_at": "2024-03-18T09:30:00Z"
        }"#;

        let receipt: Receipt = decode_json(body).unwrap();
        let date = receipt.receipt_date.unwrap();
        assert_eq!(date.to_string(), "2024-03-18");
        assert_eq!(receipt.created_at.to_rfc3339(), "2024-03-18T09:30:00+00:00");
    }

    #[test]
    fn malformed_json_is_wrapped_not_leaked() {
        let err = decode_json::<UserSettings>(b"not json").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn missing_required_fields_fail_to_decode() {
        let err = decode_json::<UserSettings>(br#"{"working_country_code": "BE"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
