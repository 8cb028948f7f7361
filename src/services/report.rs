//! Yearly compliance report download.

use bytes::Bytes;

use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct ReportApi {
    client: ApiClient,
}

impl ReportApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the PDF report for `year` as raw bytes.
    pub async fn download(&self, year: i32) -> Result<Bytes> {
        self.client
            .request_raw(Endpoint::get("/report").with_query([("year", year.to_string())]))
            .await
    }
}
