//! Receipt shapes.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored proof-of-presence receipt.
#[derive(Debug, Clone, Deserialize)]
pub struct Receipt {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Extracted or manually corrected purchase date; `None` until OCR
    /// finds one or the user sets it.
    pub receipt_date: Option<NaiveDate>,
    pub ocr_status: OcrStatus,
    pub storage_path: String,
    pub image_url: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Outcome of date extraction on an uploaded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OcrStatus {
    Success,
    NoDateFound,
    Failed,
    Skipped,
    Manual,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReceiptDateUpdate {
    pub receipt_date: NaiveDate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReceiptList {
    pub receipts: Vec<Receipt>,
    pub total: i64,
}
