//! Receipt capture and management.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::client::ApiClient;
use crate::decode::decode_json;
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::types::{Receipt, ReceiptDateUpdate, ReceiptList};

#[derive(Debug, Clone)]
pub struct ReceiptsApi {
    client: ApiClient,
}

impl ReceiptsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Upload one JPEG image and decode the stored receipt the backend
    /// answers with.
    pub async fn upload(&self, image: Vec<u8>) -> Result<Receipt> {
        let body = self.client.upload("/receipts/upload", image).await?;
        decode_json(&body)
    }

    pub async fn list(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<ReceiptList> {
        let mut endpoint = Endpoint::get("/receipts");
        if let Some(date) = start_date {
            endpoint = endpoint.with_query([("start_date", date.to_string())]);
        }
        if let Some(date) = end_date {
            endpoint = endpoint.with_query([("end_date", date.to_string())]);
        }
        self.client.request(endpoint).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Receipt> {
        self.client
            .request(Endpoint::get(format!("/receipts/{id}")))
            .await
    }

    /// Correct the receipt's date, e.g. after OCR found none.
    pub async fn update_date(&self, id: Uuid, date: NaiveDate) -> Result<Receipt> {
        let body = ReceiptDateUpdate { receipt_date: date };
        self.client
            .request(Endpoint::put(format!("/receipts/{id}/date")).with_json_body(&body)?)
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.client
            .request_no_content(Endpoint::delete(format!("/receipts/{id}")))
            .await
    }
}
